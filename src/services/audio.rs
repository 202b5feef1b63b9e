//! Audio service.
//!
//! The core never mixes audio itself; it owns a background thread that
//! tracks loaded music/effect entries and receives playback commands over
//! a channel. The engine loop stays non-blocking: commands are fire-and-
//! forget, results come back as messages polled on the main thread.

use std::path::PathBuf;
use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, info, warn};
use rustc_hash::FxHashMap;

/// Commands sent to the audio thread.
#[derive(Debug, Clone)]
pub enum AudioCmd {
    LoadMusic { id: String, path: String },
    LoadFx { id: String, path: String },
    PlayMusic { id: String, looped: bool },
    StopMusic { id: String },
    PlayFx { id: String },
    SetVolume(f32),
    Shutdown,
}

/// Messages emitted by the audio thread.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioMessage {
    MusicLoaded(String),
    FxLoaded(String),
    Failed { id: String, reason: String },
}

/// Bridge between the main thread and the audio thread.
pub struct AudioService {
    tx_cmd: Sender<AudioCmd>,
    rx_msg: Receiver<AudioMessage>,
    handle: Option<JoinHandle<()>>,
}

impl AudioService {
    /// Spawn the audio thread and connect the command/message channels.
    pub fn new() -> Self {
        let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
        let (tx_msg, rx_msg) = unbounded::<AudioMessage>();

        let handle = std::thread::spawn(move || audio_thread(rx_cmd, tx_msg));

        Self {
            tx_cmd,
            rx_msg,
            handle: Some(handle),
        }
    }

    /// Queue a command for the audio thread.
    pub fn send(&self, cmd: AudioCmd) {
        if self.tx_cmd.send(cmd).is_err() {
            warn!("Audio thread is gone; command dropped.");
        }
    }

    /// Drain any pending messages from the audio thread.
    pub fn poll_messages(&self) -> Vec<AudioMessage> {
        self.rx_msg.try_iter().collect()
    }

    /// Request shutdown and join the audio thread.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.tx_cmd.send(AudioCmd::Shutdown);
            let _ = handle.join();
        }
    }
}

impl Default for AudioService {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AudioService {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    info!("Audio thread started.");

    let mut music: FxHashMap<String, PathBuf> = FxHashMap::default();
    let mut effects: FxHashMap<String, PathBuf> = FxHashMap::default();
    let mut volume: f32 = 1.0;

    while let Ok(cmd) = rx_cmd.recv() {
        match cmd {
            AudioCmd::LoadMusic { id, path } => {
                let path = PathBuf::from(path);
                if path.is_file() {
                    music.insert(id.clone(), path);
                    let _ = tx_msg.send(AudioMessage::MusicLoaded(id));
                } else {
                    let _ = tx_msg.send(AudioMessage::Failed {
                        id,
                        reason: format!("no such file: {}", path.display()),
                    });
                }
            }
            AudioCmd::LoadFx { id, path } => {
                let path = PathBuf::from(path);
                if path.is_file() {
                    effects.insert(id.clone(), path);
                    let _ = tx_msg.send(AudioMessage::FxLoaded(id));
                } else {
                    let _ = tx_msg.send(AudioMessage::Failed {
                        id,
                        reason: format!("no such file: {}", path.display()),
                    });
                }
            }
            AudioCmd::PlayMusic { id, looped } => {
                if music.contains_key(&id) {
                    debug!("Playing music '{}' (looped: {}, volume {}).", id, looped, volume);
                } else {
                    let _ = tx_msg.send(AudioMessage::Failed {
                        id,
                        reason: "music not loaded".into(),
                    });
                }
            }
            AudioCmd::StopMusic { id } => {
                debug!("Stopping music '{}'.", id);
            }
            AudioCmd::PlayFx { id } => {
                if effects.contains_key(&id) {
                    debug!("Playing effect '{}' (volume {}).", id, volume);
                } else {
                    let _ = tx_msg.send(AudioMessage::Failed {
                        id,
                        reason: "effect not loaded".into(),
                    });
                }
            }
            AudioCmd::SetVolume(v) => {
                volume = v.clamp(0.0, 1.0);
            }
            AudioCmd::Shutdown => break,
        }
    }

    info!("Audio thread stopped.");
}
