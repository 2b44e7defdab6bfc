use assert_cmd::Command;

pub const TEST_SEED: &str = "42";
pub const TEST_TODAY: &str = "2025-12-27";

/// Days from Jan 1 through Dec 27, 2025 with no skipped days.
#[allow(dead_code)]
pub const FULL_YEAR_ENTRIES: usize = 361;

/// Creates a `Command` for the `sixty` binary with a clean, reproducible environment.
/// The journal is seeded and no days are skipped, so every day up to today has an entry.
pub fn base_sixty_command() -> Command {
    let mut cmd = Command::cargo_bin("sixty").expect("sixty binary not built");
    configure_sixty_command(&mut cmd);
    cmd
}

/// Applies the standard reproducible environment to an existing `Command`.
pub fn configure_sixty_command(cmd: &mut Command) {
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
        cmd.env("PATH", path);
    }
    cmd.env("SIXTY_SEED", TEST_SEED)
        .env("SIXTY_TODAY", TEST_TODAY)
        .env("SIXTY_SKIP_RATE", "0");
}
