use crate::adapters::outbound::formatters::{JsonTreeFormatter, TextTreeFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::TreeFormatter;

/// Factory for creating tree formatters
///
/// Picks the formatter adapter for an output format so `main` never names
/// a concrete formatter type.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for `format`
    ///
    /// `color` only affects the text tree; JSON output is never coloured.
    ///
    /// # Examples
    /// ```
    /// use pdc_tangle::application::dto::OutputFormat;
    /// use pdc_tangle::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, color: bool) -> Box<dyn TreeFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextTreeFormatter::with_color(color)),
            OutputFormat::Json => Box::new(JsonTreeFormatter::new()),
        }
    }

    /// Returns the progress message shown before formatting
    ///
    /// # Examples
    /// ```
    /// use pdc_tangle::application::dto::OutputFormat;
    /// use pdc_tangle::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Text);
    /// assert_eq!(message, "📝 Rendering text tree...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Rendering text tree...",
            OutputFormat::Json => "📝 Rendering JSON document...",
        }
    }
}
