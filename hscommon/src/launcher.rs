//! Runs the game as a child process.
//!
//! The process handle is owned, not finalized: `stop` kills and reaps the
//! child, and `Drop` calls `stop`, so the game never outlives the toolset on
//! any exit path. A background thread polls for a natural exit so the UI
//! thread is never blocked on `wait`.

use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use log::{info, warn};

use crate::error::CommonError;

const POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug)]
pub struct GameLauncher {
    child: Arc<Mutex<Option<Child>>>,
}

impl GameLauncher {
    pub fn launch(executable: &Path, arguments: &[String]) -> Result<Self, CommonError> {
        let child = Command::new(executable)
            .args(arguments)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                CommonError::Process(format!("failed to start {}: {e}", executable.display()))
            })?;
        info!(
            "launched game process {} (pid {})",
            executable.display(),
            child.id()
        );

        let slot = Arc::new(Mutex::new(Some(child)));
        let watcher = Arc::clone(&slot);
        thread::spawn(move || {
            loop {
                {
                    let mut guard = watcher.lock().unwrap();
                    match guard.as_mut() {
                        None => break,
                        Some(child) => match child.try_wait() {
                            Ok(Some(status)) => {
                                info!("game process exited: {status}");
                                *guard = None;
                                break;
                            }
                            Ok(None) => {}
                            Err(e) => {
                                warn!("failed to poll game process: {e}");
                                *guard = None;
                                break;
                            }
                        },
                    }
                }
                thread::sleep(POLL_INTERVAL);
            }
        });

        Ok(Self { child: slot })
    }

    pub fn is_running(&self) -> bool {
        self.child.lock().unwrap().is_some()
    }

    /// Kills and reaps the child if it is still alive. Idempotent.
    pub fn stop(&self) {
        let mut guard = self.child.lock().unwrap();
        if let Some(mut child) = guard.take() {
            if let Err(e) = child.kill() {
                warn!("failed to kill game process: {e}");
            }
            let _ = child.wait();
            info!("game process stopped");
        }
    }
}

impl Drop for GameLauncher {
    fn drop(&mut self) {
        self.stop();
    }
}
