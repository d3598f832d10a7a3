pub mod buffer;
pub mod error;
pub mod plot;
pub mod source;
pub use buffer::{ChartFrame, Series};
pub use error::ChartError;
pub use plot::{render_chart_png, PlotStyle};
pub use source::{SampleSource, UniformSource};
#[cfg(test)]
pub use source::ScriptedSource;
