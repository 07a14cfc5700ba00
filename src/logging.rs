use log::{Level, LevelFilter, SetLoggerError};
use std::io;

/// Initialize logging with the fern logger.
///
/// Every record at or above `level` is passed to `callback`, and is also
/// written to stderr with its source location.
pub fn log<F: Fn(Level, &str) + Send + Sync + 'static>(
    level: LevelFilter,
    callback: F,
) -> Result<(), SetLoggerError> {
    fern::Dispatch::new()
        .level(level)
        // This will be used by the driver to attach outcomes to its reports
        .chain(fern::Output::call(move |record| {
            callback(record.level(), &format!("{}", record.args()))
        }))
        .chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} fs-testing{}] {}",
                        record.level(),
                        match (record.file(), record.line()) {
                            (Some(file), Some(line)) => format!(":{}:{}", file, line),
                            _ => "".into(),
                        },
                        message
                    ))
                })
                .chain(io::stderr()),
        )
        .apply()
}
