use std::io::Cursor;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::LineSeries;
use plotters::prelude::*;
use crate::drivers::error::ChartError;
use crate::drivers::ChartFrame;
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub palette: Vec<RGBColor>,
    /// Axis tick labels and the legend. Both need a system font.
    pub annotate: bool,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: RGBColor(234, 234, 242),
            palette: vec![
                RGBColor(76, 114, 176),
                RGBColor(221, 132, 82),
                RGBColor(85, 168, 104),
                RGBColor(196, 78, 82),
                RGBColor(129, 114, 179),
            ],
            annotate: true,
        }
    }
}
/// Render the frame's series as a line chart and encode it as PNG.
pub fn render_chart_png(frame: &ChartFrame, style: PlotStyle) -> Result<Vec<u8>, ChartError> {
    if frame.is_empty() {
        return Err(ChartError::Export("no visible series to render".into()));
    }
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&style.background)?;
        let x_max = frame.x_axis.last().copied().unwrap_or(0.0).max(1.0);
        let y_min = frame
            .samples
            .iter()
            .flat_map(|s| s.iter().copied())
            .fold(0.0f64, f64::min);
        let y_max = frame
            .samples
            .iter()
            .flat_map(|s| s.iter().copied())
            .fold(1.0f64, f64::max);
        let (left_area, bottom_area, tick_labels) = if style.annotate {
            (45, 40, 10)
        } else {
            (0, 0, 0)
        };
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .set_label_area_size(LabelAreaPosition::Left, left_area)
            .set_label_area_size(LabelAreaPosition::Bottom, bottom_area)
            .build_cartesian_2d(0f64..x_max, y_min..y_max)?;
        chart
            .configure_mesh()
            .x_labels(tick_labels)
            .y_labels(tick_labels)
            .light_line_style(&WHITE)
            .draw()?;
        for (idx, samples) in frame.samples.iter().enumerate() {
            let color = style.palette[idx % style.palette.len()];
            let series = frame.x_axis.iter().copied().zip(samples.iter().copied());
            let drawn = chart.draw_series(LineSeries::new(series, &color))?;
            if !style.annotate {
                continue;
            }
            drawn
                .label(
                    frame
                        .labels
                        .get(idx)
                        .cloned()
                        .unwrap_or_else(|| format!("line{idx}")),
                )
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
        }
        if style.annotate {
            chart
                .configure_series_labels()
                .border_style(&BLACK.mix(0.2))
                .background_style(&WHITE.mix(0.8))
                .draw()?;
        }
        root.present()?;
    }
    encode_png(&buffer, style.width, style.height)
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ChartError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| ChartError::Export("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
#[cfg(test)]
mod tests {
    use super::*;
    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    fn frame(series: usize) -> ChartFrame {
        ChartFrame {
            x_axis: (0..16u32).map(f64::from).collect(),
            labels: (0..series).map(|i| format!("line{i}")).collect(),
            samples: (0..series)
                .map(|i| (0..16).map(|j| ((i + j) % 4) as f64 / 4.0).collect())
                .collect(),
        }
    }
    #[test]
    fn renders_png() {
        let style = PlotStyle {
            width: 200,
            height: 120,
            annotate: false,
            ..PlotStyle::default()
        };
        let png = render_chart_png(&frame(2), style).unwrap();
        assert!(png.starts_with(&PNG_SIGNATURE));
    }
    #[test]
    fn empty_frame_is_an_error() {
        let err = render_chart_png(&frame(0), PlotStyle::default()).unwrap_err();
        assert!(matches!(err, ChartError::Export(_)));
    }
}
