//! Implementation of different callback functions, which report the result of a figure.
use crate::error::Result;

use serde::Serialize;
use std::fmt::Write;

/// The numbers a figure reports to the user.
pub trait Report {
    /// Returns the number of decimal places values are printed with.
    fn precision(&self) -> usize;

    /// Returns the labelled values, starting with the exact integral.
    fn values(&self) -> Vec<(&'static str, f64)>;
}

/// Trait for implementing callbacks that are invoked once a figure has been drawn.
pub trait Callback<R> {
    /// This method is called with the numbers of the finished figure and may print them.
    fn print(&self, report: &R) -> Result<()>;
}

/// A callback function that does nothing
pub struct SinkCallback {}

impl<R> Callback<R> for SinkCallback {
    fn print(&self, _: &R) -> Result<()> {
        Ok(())
    }
}

/// A callback function that prints one `label: value` line per value.
pub struct SimpleCallback {}

impl<R: Report> Callback<R> for SimpleCallback {
    fn print(&self, report: &R) -> Result<()> {
        print!("{}", format_report(report));
        Ok(())
    }
}

/// A callback function that prints the report as a single line of JSON.
pub struct JsonCallback {}

impl<R: Serialize> Callback<R> for JsonCallback {
    fn print(&self, report: &R) -> Result<()> {
        println!("{}", serde_json::to_string(report)?);
        Ok(())
    }
}

/// Formats the values of `report` with its precision, one line each.
pub fn format_report<R: Report>(report: &R) -> String {
    let precision = report.precision();

    report
        .values()
        .into_iter()
        .fold(String::new(), |mut text, (label, value)| {
            // writing into a `String` cannot fail
            let _ = writeln!(text, "{}: {:.*}", label, precision, value);
            text
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Fixed;

    impl Report for Fixed {
        fn precision(&self) -> usize {
            3
        }

        fn values(&self) -> Vec<(&'static str, f64)> {
            vec![("Exact", 0.5), ("Guess", 2.0 / 3.0)]
        }
    }

    #[test]
    fn formats_with_precision() {
        assert_eq!(format_report(&Fixed), "Exact: 0.500\nGuess: 0.667\n");
    }

    #[test]
    fn callbacks_succeed() {
        assert!(SinkCallback {}.print(&Fixed).is_ok());
        assert!(SimpleCallback {}.print(&Fixed).is_ok());
        assert!(JsonCallback {}.print(&Fixed).is_ok());
    }
}
