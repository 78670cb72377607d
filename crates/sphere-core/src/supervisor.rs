//! Failure boundary around the visualization.
//!
//! [`Supervised`] owns the scene and its presenter. Any failure while
//! mounting or presenting a frame (error or panic) tears both down, engages
//! the static [`Fallback`] once and keeps the error inside this boundary.

use crate::config::SceneConfig;
use crate::scene::{FrameInput, RenderState, SphereScene};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Something that can draw a [`RenderState`], usually a GPU renderer.
pub trait Presenter {
    fn present(&mut self, state: &RenderState<'_>) -> anyhow::Result<()>;
    fn resize(&mut self, width: u32, height: u32);
}

/// Static replacement shown once the visualization is gone.
pub trait Fallback {
    fn engage(&mut self, reason: &anyhow::Error);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Active,
    Fallback,
    Unmounted,
}

struct Live<P> {
    scene: SphereScene,
    presenter: P,
}

pub struct Supervised<P, F> {
    live: Option<Live<P>>,
    fallback: F,
    status: Status,
}

impl<P: Presenter, F: Fallback> Supervised<P, F> {
    /// Build the scene and take ownership of the presenter. A presenter that
    /// failed to initialize, or an invalid config, goes straight to fallback.
    pub fn mount(config: SceneConfig, presenter: anyhow::Result<P>, fallback: F) -> Self {
        let mut this = Self {
            live: None,
            fallback,
            status: Status::Active,
        };
        let built = presenter.and_then(|presenter| {
            let scene = SphereScene::new(config)?;
            Ok(Live { scene, presenter })
        });
        match built {
            Ok(live) => this.live = Some(live),
            Err(e) => this.fail(e),
        }
        this
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn scene(&self) -> Option<&SphereScene> {
        self.live.as_ref().map(|l| &l.scene)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(live) = self.live.as_mut() {
            live.scene.set_viewport(width, height);
            live.presenter.resize(width, height);
        }
    }

    /// Advance and present one frame. Returns the status after the frame.
    pub fn frame(&mut self, input: &FrameInput<'_>) -> Status {
        let Some(live) = self.live.as_mut() else {
            return self.status;
        };
        let Live { scene, presenter } = live;
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            let state = scene.advance(input);
            presenter.present(&state)
        }));
        let err = match outcome {
            Ok(Ok(())) => return self.status,
            Ok(Err(e)) => e,
            Err(panic) => anyhow::anyhow!("frame panicked: {}", panic_message(&*panic)),
        };
        self.fail(err);
        self.status
    }

    /// Release the scene and presenter. Further frames do nothing.
    pub fn unmount(&mut self) {
        if self.live.take().is_some() {
            log::info!("[supervisor] unmounted");
        }
        if self.status == Status::Active {
            self.status = Status::Unmounted;
        }
    }

    fn fail(&mut self, err: anyhow::Error) {
        self.live = None;
        if self.status == Status::Active {
            log::error!("[supervisor] visualization disabled: {:#}", err);
            self.status = Status::Fallback;
            self.fallback.engage(&err);
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
