//! Frame-driven replay of a [`Script`] against a live drawing session.

use super::script::{Script, ScriptEvent};
use crate::config::{Action, Config};
use crate::draw::{Canvas, Color};
use crate::export::export_png;
use crate::input::{InputState, Key};
use crate::render_loop::RenderLoop;
use anyhow::{Context, Result};
use calloop::EventLoop;
use calloop::timer::{TimeoutAction, Timer};
use log::{debug, info, warn};
use std::collections::VecDeque;
use std::time::Duration;

/// Outcome of a finished playback.
#[derive(Debug)]
pub struct PlaybackReport {
    /// Frames rendered, including idle frames
    pub frames: u64,
    /// Commands committed when playback ended
    pub commands: usize,
    /// PNGs requested by `export` events or the export keybinding, in order
    pub snapshots: Vec<Vec<u8>>,
    /// Export of the final drawing
    pub final_png: Vec<u8>,
}

/// Replays script events frame by frame.
///
/// Each frame applies events in order until a `wait` event (which idles for
/// its frame count) or the end of the script, then ticks the render loop.
/// Playback ends when every event has been applied and all waits have elapsed,
/// or when the exit keybinding fires.
pub struct Player {
    events: VecDeque<ScriptEvent>,
    input: InputState,
    canvas: Canvas,
    render_loop: RenderLoop,
    width: i32,
    height: i32,
    scale: u32,
    background: Option<Color>,
    idle_frames: u32,
    snapshots: Vec<Vec<u8>>,
    failure: Option<anyhow::Error>,
}

impl Player {
    /// Prepares a session for `script`.
    ///
    /// Canvas size falls back to `[canvas]` when the script omits it.
    pub fn new(script: Script, config: &Config, scale: u32) -> Result<Self> {
        let width = script.width.unwrap_or(config.canvas.width);
        let height = script.height.unwrap_or(config.canvas.height);
        let canvas = Canvas::new(width, height).context("Failed to create drawing surface")?;
        let input = InputState::from_config(config)?;
        let background = config.background();

        Ok(Self {
            events: script.events.into(),
            input,
            canvas,
            render_loop: RenderLoop::new(background),
            width,
            height,
            scale,
            background,
            idle_frames: 0,
            snapshots: Vec::new(),
            failure: None,
        })
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn frames(&self) -> u64 {
        self.render_loop.frames()
    }

    /// Returns `true` once there is nothing left to play.
    pub fn is_finished(&self) -> bool {
        self.input.should_exit || (self.events.is_empty() && self.idle_frames == 0)
    }

    /// Advances playback by one frame.
    pub fn step(&mut self) -> Result<()> {
        if self.idle_frames > 0 {
            self.idle_frames -= 1;
        } else {
            while let Some(event) = self.events.pop_front() {
                if let ScriptEvent::Wait { frames } = event {
                    self.idle_frames = frames;
                    break;
                }
                self.apply(event);
                if self.input.take_export_request() {
                    self.snapshot()?;
                }
                if self.input.should_exit {
                    info!("Exit requested; stopping playback");
                    break;
                }
            }
        }

        self.render_loop
            .tick(&self.canvas, &mut self.input)
            .context("Failed to render frame")?;
        Ok(())
    }

    /// Plays every remaining frame without pacing.
    pub fn run_unpaced(mut self) -> Result<PlaybackReport> {
        while !self.is_finished() {
            self.step()?;
        }
        self.finish()
    }

    /// Plays the script on a calloop event loop, one frame every `1/fps` seconds.
    pub fn run(mut self, fps: u32) -> Result<PlaybackReport> {
        let interval = Duration::from_secs_f64(1.0 / f64::from(fps.max(1)));
        info!(
            "Playing {} events at {} fps on a {}x{} canvas",
            self.events.len(),
            fps,
            self.width,
            self.height
        );

        let mut event_loop: EventLoop<Player> =
            EventLoop::try_new().context("Failed to create event loop")?;
        let signal = event_loop.get_signal();

        event_loop
            .handle()
            .insert_source(Timer::immediate(), move |_deadline, _, player| {
                if let Err(err) = player.step() {
                    player.failure = Some(err);
                    signal.stop();
                    return TimeoutAction::Drop;
                }
                if player.is_finished() {
                    signal.stop();
                    return TimeoutAction::Drop;
                }
                TimeoutAction::ToDuration(interval)
            })
            .map_err(|err| err.error)
            .context("Failed to register frame timer")?;

        event_loop
            .run(None, &mut self, |_| {})
            .context("Playback event loop failed")?;

        if let Some(err) = self.failure.take() {
            return Err(err);
        }
        self.finish()
    }

    /// Exports the final drawing and consumes the player.
    pub fn finish(self) -> Result<PlaybackReport> {
        let final_png = export_png(
            self.input.log(),
            self.width,
            self.height,
            self.scale,
            self.background,
        )
        .context("Failed to export drawing")?;

        Ok(PlaybackReport {
            frames: self.render_loop.frames(),
            commands: self.input.log().len(),
            snapshots: self.snapshots,
            final_png,
        })
    }

    fn snapshot(&mut self) -> Result<()> {
        let png = export_png(
            self.input.log(),
            self.width,
            self.height,
            self.scale,
            self.background,
        )
        .context("Failed to export snapshot")?;
        debug!("Snapshot {} taken", self.snapshots.len() + 1);
        self.snapshots.push(png);
        Ok(())
    }

    fn apply(&mut self, event: ScriptEvent) {
        debug!("Applying {:?}", event);
        let input = &mut self.input;
        match event {
            ScriptEvent::PointerDown { x, y } => input.on_pointer_down((x, y).into()),
            ScriptEvent::PointerMove { x, y } => input.on_pointer_move((x, y).into()),
            ScriptEvent::PointerUp { x, y } => input.on_pointer_up((x, y).into()),
            ScriptEvent::PointerLeave => input.on_pointer_leave(),
            ScriptEvent::Undo => {
                input.undo();
            }
            ScriptEvent::Redo => {
                input.redo();
            }
            ScriptEvent::Clear => input.clear(),
            ScriptEvent::SetWidth { value } => {
                if let Err(err) = input.set_width(value) {
                    warn!("Ignoring set_width: {err}");
                }
            }
            ScriptEvent::SetAngle { value } => {
                if let Err(err) = input.set_angle(value) {
                    warn!("Ignoring set_angle: {err}");
                }
            }
            ScriptEvent::SetColor { value } => {
                // Rejected input is already logged by the tool state.
                let _ = input.set_color_hex(&value);
            }
            ScriptEvent::SelectPen => input.select_pen(),
            ScriptEvent::SelectSticker { glyph } => input.select_sticker(&glyph),
            ScriptEvent::RegisterSticker { glyph } => {
                let _ = input.register_sticker(&glyph);
            }
            ScriptEvent::KeyPress { key } => match Key::from_name(&key) {
                Key::Unknown => warn!("Unknown key '{}'", key),
                key => input.on_key_press(key),
            },
            ScriptEvent::KeyRelease { key } => input.on_key_release(Key::from_name(&key)),
            ScriptEvent::Export => input.handle_action(Action::Export),
            ScriptEvent::Wait { .. } => {}
        }
    }
}
