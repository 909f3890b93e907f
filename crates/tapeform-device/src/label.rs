#![forbid(unsafe_code)]

//! The label print job.
//!
//! One job renders: a centered header at natural size, the message body
//! wrapped to the device's column budget in condensed font at double
//! size, a centered Code 39 barcode of the numeric label id, then a cut.
//! The message is formatted *before* any command touches the device, so
//! a rejected message never produces a half-printed label.

use thiserror::Error;

use tapeform_text::{ColumnBudget, LayoutError, format_message};

use crate::driver::{Align, BarcodeKind, Font, ReceiptDriver};

/// Column budget of the target device in the body font.
pub const DEFAULT_COLUMNS: usize = 27;

/// [`DEFAULT_COLUMNS`] as a validated budget, checked at compile time.
pub const DEFAULT_BUDGET: ColumnBudget = match ColumnBudget::new(DEFAULT_COLUMNS) {
    Ok(budget) => budget,
    Err(_) => panic!("default budget must be positive"),
};

/// Configuration for one label job.
///
/// All state a job needs arrives through this value; there are no
/// process-wide device or template handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelOptions {
    /// Header line printed centered above the message.
    pub header: String,
    /// Numeric id rendered as a Code 39 barcode.
    pub barcode: u32,
    /// Column budget for the message body.
    pub budget: ColumnBudget,
}

impl LabelOptions {
    /// Options with the device's default 27-column budget.
    #[must_use]
    pub fn new(header: impl Into<String>, barcode: u32) -> Self {
        Self {
            header: header.into(),
            barcode,
            budget: DEFAULT_BUDGET,
        }
    }
}

/// Failure of a label job.
#[derive(Debug, Error)]
pub enum LabelError<E>
where
    E: std::error::Error + 'static,
{
    /// The message was rejected before printing started.
    #[error("message rejected: {0}")]
    Layout(#[from] LayoutError),
    /// The device refused a command mid-job.
    #[error("printer driver error: {0}")]
    Driver(#[source] E),
}

/// Print one label.
///
/// # Errors
/// [`LabelError::Layout`] when the message has no printable content;
/// [`LabelError::Driver`] when any device command fails.
pub fn print_label<D>(
    driver: &mut D,
    options: &LabelOptions,
    message: &str,
) -> Result<(), LabelError<D::Error>>
where
    D: ReceiptDriver,
    D::Error: std::error::Error + 'static,
{
    // Reject empty messages before the device sees a single command.
    let lines = format_message(message, options.budget)?;

    driver.init().map_err(LabelError::Driver)?;
    driver.smooth(true).map_err(LabelError::Driver)?;

    driver.size(1, 1).map_err(LabelError::Driver)?;
    driver.align(Align::Center).map_err(LabelError::Driver)?;
    driver.print_line(&options.header).map_err(LabelError::Driver)?;

    driver.size(2, 2).map_err(LabelError::Driver)?;
    driver.font(Font::B).map_err(LabelError::Driver)?;
    driver.align(Align::Left).map_err(LabelError::Driver)?;
    for line in &lines {
        driver.print_line(line).map_err(LabelError::Driver)?;
    }

    driver.align(Align::Center).map_err(LabelError::Driver)?;
    driver
        .barcode(&options.barcode.to_string(), BarcodeKind::Code39)
        .map_err(LabelError::Driver)?;
    driver.align(Align::Left).map_err(LabelError::Driver)?;

    driver.cut().map_err(LabelError::Driver)?;
    driver.end().map_err(LabelError::Driver)?;

    tracing::debug!(
        lines = lines.len(),
        barcode = options.barcode,
        "label job sent"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Command {
        Init,
        Smooth(bool),
        Font(Font),
        Size(u8, u8),
        Align(Align),
        Print(String),
        Barcode(String, BarcodeKind),
        Cut,
        End,
    }

    /// Records every command; optionally fails on the nth one.
    #[derive(Debug, Default)]
    struct RecordingDriver {
        commands: Vec<Command>,
        fail_at: Option<usize>,
    }

    #[derive(Debug, Error, PartialEq, Eq)]
    #[error("device offline")]
    struct DeviceOffline;

    impl RecordingDriver {
        fn record(&mut self, command: Command) -> Result<(), DeviceOffline> {
            if self.fail_at == Some(self.commands.len()) {
                return Err(DeviceOffline);
            }
            self.commands.push(command);
            Ok(())
        }
    }

    impl ReceiptDriver for RecordingDriver {
        type Error = DeviceOffline;

        fn init(&mut self) -> Result<(), DeviceOffline> {
            self.record(Command::Init)
        }
        fn smooth(&mut self, on: bool) -> Result<(), DeviceOffline> {
            self.record(Command::Smooth(on))
        }
        fn font(&mut self, font: Font) -> Result<(), DeviceOffline> {
            self.record(Command::Font(font))
        }
        fn size(&mut self, width: u8, height: u8) -> Result<(), DeviceOffline> {
            self.record(Command::Size(width, height))
        }
        fn align(&mut self, align: Align) -> Result<(), DeviceOffline> {
            self.record(Command::Align(align))
        }
        fn print_line(&mut self, line: &str) -> Result<(), DeviceOffline> {
            self.record(Command::Print(line.to_string()))
        }
        fn barcode(&mut self, payload: &str, kind: BarcodeKind) -> Result<(), DeviceOffline> {
            self.record(Command::Barcode(payload.to_string(), kind))
        }
        fn cut(&mut self) -> Result<(), DeviceOffline> {
            self.record(Command::Cut)
        }
        fn end(&mut self) -> Result<(), DeviceOffline> {
            self.record(Command::End)
        }
    }

    #[test]
    fn default_options_use_device_budget() {
        let options = LabelOptions::new("Hello Humphrey", 5);
        assert_eq!(options.budget.columns(), DEFAULT_COLUMNS);
        assert_eq!(options.budget, DEFAULT_BUDGET);
    }

    #[test]
    fn job_issues_commands_in_order() {
        let mut driver = RecordingDriver::default();
        let options = LabelOptions::new("Hello Humphrey", 5);

        print_label(&mut driver, &options, "Dry cleaning").unwrap();

        assert_eq!(
            driver.commands,
            vec![
                Command::Init,
                Command::Smooth(true),
                Command::Size(1, 1),
                Command::Align(Align::Center),
                Command::Print("Hello Humphrey".into()),
                Command::Size(2, 2),
                Command::Font(Font::B),
                Command::Align(Align::Left),
                Command::Print("Dry cleaning".into()),
                Command::Align(Align::Center),
                Command::Barcode("5".into(), BarcodeKind::Code39),
                Command::Align(Align::Left),
                Command::Cut,
                Command::End,
            ]
        );
    }

    #[test]
    fn wrapped_message_prints_every_line() {
        let mut driver = RecordingDriver::default();
        let options = LabelOptions::new("Hello Humphrey", 5);

        print_label(&mut driver, &options, "Move chest in bathroom needs fixing").unwrap();

        let printed: Vec<&str> = driver
            .commands
            .iter()
            .filter_map(|c| match c {
                Command::Print(line) => Some(line.as_str()),
                _ => None,
            })
            .skip(1) // header
            .collect();
        assert!(printed.len() >= 2);
        assert!(printed.iter().all(|line| line.len() <= DEFAULT_COLUMNS));
    }

    #[test]
    fn empty_message_rejected_before_any_command() {
        let mut driver = RecordingDriver::default();
        let options = LabelOptions::new("Hello Humphrey", 5);

        let err = print_label(&mut driver, &options, "   ").unwrap_err();

        assert!(matches!(err, LabelError::Layout(LayoutError::EmptyMessage)));
        assert!(driver.commands.is_empty());
    }

    #[test]
    fn driver_failure_surfaces_as_driver_error() {
        let mut driver = RecordingDriver {
            fail_at: Some(4),
            ..RecordingDriver::default()
        };
        let options = LabelOptions::new("Hello Humphrey", 5);

        let err = print_label(&mut driver, &options, "Water garden").unwrap_err();

        assert!(matches!(err, LabelError::Driver(DeviceOffline)));
        assert_eq!(driver.commands.len(), 4);
    }
}
