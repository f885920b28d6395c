use super::escape::escape_html;
use crate::ports::outbound::{ChartRenderer, ChartTarget};
use crate::report_analysis::domain::{SeverityHistogram, TypeHistogram};
use crate::report_analysis::services::chart_layout::{
    bar_layout, donut_layout, num, BAR_LABEL_Y, CANVAS_HEIGHT, CANVAS_WIDTH,
};

/// Fill opacity of donut slices
const SLICE_OPACITY: &str = "0.9";

/// SvgChartRenderer adapter drawing both dashboard charts as inline SVG
///
/// Geometry comes from `chart_layout`; this adapter only serializes it.
/// Every render builds a fresh document and replaces the target's content.
pub struct SvgChartRenderer;

impl SvgChartRenderer {
    pub fn new() -> Self {
        Self
    }

    fn open_svg() -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="100%" height="100%">"#,
            num(CANVAS_WIDTH),
            num(CANVAS_HEIGHT)
        )
    }

    fn text_element(x: f64, y: f64, font_size: u32, content: &str) -> String {
        format!(
            r#"<text x="{}" y="{}" font-size="{}" text-anchor="middle">{}</text>"#,
            num(x),
            num(y),
            font_size,
            content
        )
    }

    /// Builds the bar chart document
    pub fn severity_svg(histogram: &SeverityHistogram) -> String {
        let mut out = Self::open_svg();
        for bar in bar_layout(histogram) {
            out.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="4" fill="{}"></rect>"#,
                num(bar.x),
                num(bar.y),
                num(bar.width),
                num(bar.height),
                bar.color
            ));
            out.push_str(&Self::text_element(
                bar.center_x(),
                BAR_LABEL_Y,
                10,
                &bar.severity.to_string(),
            ));
            out.push_str(&Self::text_element(
                bar.center_x(),
                bar.count_label_y(),
                12,
                &bar.count.to_string(),
            ));
        }
        out.push_str("</svg>");
        out
    }

    /// Builds the donut chart document
    pub fn type_svg(histogram: &TypeHistogram) -> String {
        let mut out = Self::open_svg();
        for slice in donut_layout(histogram) {
            let (label_x, label_y) = slice.label_position();
            out.push_str(&format!(
                r#"<path d="{}" fill="{}" opacity="{}"></path>"#,
                slice.path_data(),
                slice.color,
                SLICE_OPACITY
            ));
            out.push_str(&Self::text_element(
                label_x,
                label_y,
                10,
                &escape_html(&slice.label()),
            ));
        }
        out.push_str("</svg>");
        out
    }
}

impl Default for SvgChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn render_severity_chart(&self, target: &mut ChartTarget, histogram: &SeverityHistogram) {
        target.replace(Self::severity_svg(histogram));
    }

    fn render_type_chart(&self, target: &mut ChartTarget, histogram: &TypeHistogram) {
        target.replace(Self::type_svg(histogram));
    }
}
