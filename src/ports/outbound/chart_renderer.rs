use crate::report_analysis::domain::{SeverityHistogram, TypeHistogram};

/// A chart container that renderers draw into
///
/// Rendering always replaces the whole content of the target; nothing from
/// an earlier render survives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartTarget {
    id: String,
    content: String,
}

impl ChartTarget {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            content: String::new(),
        }
    }

    /// Element id of the container
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current rendered markup
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Removes all rendered markup
    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// Replaces the rendered markup
    pub fn replace(&mut self, content: String) {
        self.content = content;
    }
}

/// ChartRenderer port for drawing the two dashboard charts
///
/// Implementations are pure functions of the histogram: the same input into
/// any target yields the same content.
pub trait ChartRenderer {
    /// Draws the severity bar chart, replacing the target's content
    fn render_severity_chart(&self, target: &mut ChartTarget, histogram: &SeverityHistogram);

    /// Draws the component-type donut chart, replacing the target's content
    fn render_type_chart(&self, target: &mut ChartTarget, histogram: &TypeHistogram);
}
