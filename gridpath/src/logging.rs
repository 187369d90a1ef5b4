use std::io::Write;

/// Install the stderr logger.
///
/// `RUST_LOG` wins when set; otherwise the level follows the `-v` count,
/// starting at `warn` so stdout carries only the result.
pub fn init(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
