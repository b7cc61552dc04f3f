//! Pronunciation playback handler

use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use lingualeo_core::WordResult;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, instrument, warn};

/// Split a player setting such as `mplayer -really-quiet` into program and arguments
pub fn split_player(player: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = player.split_whitespace();
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Play each word's pronunciation, one at a time, in the given order
#[instrument(skip_all, fields(player = ?player))]
pub async fn handle_sound(
    results: &[&WordResult],
    player: Option<&str>,
    output: &mut OutputWriter,
) -> Result<()> {
    let (program, args) = player
        .and_then(split_player)
        .ok_or_else(|| Error::invalid_args("Sound requested but no player has been supplied"))?;
    let _timer = Timer::with_details("play_sounds", program);

    for result in results {
        let Some(url) = result.sound_url.as_deref().filter(|u| !u.is_empty()) else {
            debug!(word = %result.word, "No pronunciation available");
            continue;
        };

        debug!(word = %result.word, url = %url, "Playing pronunciation");
        let status = Command::new(program)
            .args(&args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| Error::Player {
                player: program.to_string(),
                message: e.to_string(),
            })?;

        if !status.success() {
            warn!(word = %result.word, status = %status, "Player exited with failure");
            output.warning(&format!(
                "Could not play pronunciation of {} ({})",
                result.word, status
            ))?;
        }
    }

    Ok(())
}
