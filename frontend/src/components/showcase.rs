use crate::config;
use crate::content::{Step, STEPS};
use crate::utils::preload::preload_all;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const FALLBACK_GRADIENTS: [&str; 3] = [
    "linear-gradient(135deg, rgba(47,128,255,0.28), rgba(0,0,0,0.25))",
    "linear-gradient(135deg, rgba(47,128,255,0.20), rgba(0,0,0,0.35))",
    "linear-gradient(135deg, rgba(47,128,255,0.24), rgba(0,0,0,0.30))",
];

/// Which step is highlighted and whether the timer may move it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    active: usize,
    paused: bool,
    len: usize,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self {
            active: 0,
            paused: false,
            len,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// One timer period elapsed.
    pub fn tick(self) -> Self {
        if self.paused || self.len == 0 {
            return self;
        }
        Self {
            active: (self.active + 1) % self.len,
            ..self
        }
    }

    /// Jumps straight to `index`; out-of-range indices are ignored.
    pub fn select(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        Self {
            active: index,
            ..self
        }
    }

    pub fn pause(self) -> Self {
        Self {
            paused: true,
            ..self
        }
    }

    pub fn resume(self) -> Self {
        Self {
            paused: false,
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageStatus {
    Pending,
    Loaded,
    Failed,
}

/// Outcome of the mount-time image preload, one status per step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preload {
    statuses: Vec<ImageStatus>,
    ready: bool,
}

impl Preload {
    pub fn pending(len: usize) -> Self {
        Self {
            statuses: vec![ImageStatus::Pending; len],
            ready: false,
        }
    }

    /// Builds the settled state from a batch of per-image results.
    pub fn settled<E>(results: &[Result<(), E>]) -> Self {
        Self {
            statuses: results
                .iter()
                .map(|r| match r {
                    Ok(()) => ImageStatus::Loaded,
                    Err(_) => ImageStatus::Failed,
                })
                .collect(),
            ready: true,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn status(&self, index: usize) -> ImageStatus {
        self.statuses
            .get(index)
            .copied()
            .unwrap_or(ImageStatus::Pending)
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.status(index) == ImageStatus::Loaded
    }

    pub fn is_failed(&self, index: usize) -> bool {
        self.status(index) == ImageStatus::Failed
    }

    pub fn loaded_count(&self) -> usize {
        self.statuses
            .iter()
            .filter(|s| **s == ImageStatus::Loaded)
            .count()
    }

    /// A displayed image broke after preloading succeeded.
    pub fn mark_failed(&self, index: usize) -> Self {
        let mut next = self.clone();
        if let Some(status) = next.statuses.get_mut(index) {
            *status = ImageStatus::Failed;
        }
        next
    }
}

/// What the right-hand preview shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowcasePanel {
    Skeleton,
    Image(usize),
    Fallback(usize),
}

impl ShowcasePanel {
    pub fn for_state(preload: &Preload, active: usize) -> Self {
        if !preload.is_ready() {
            ShowcasePanel::Skeleton
        } else if preload.is_loaded(active) {
            ShowcasePanel::Image(active)
        } else {
            ShowcasePanel::Fallback(active)
        }
    }
}

pub fn fallback_gradient(index: usize) -> &'static str {
    FALLBACK_GRADIENTS
        .get(index)
        .copied()
        .unwrap_or(FALLBACK_GRADIENTS[0])
}

#[derive(Properties, PartialEq)]
struct StepRowProps {
    index: usize,
    step: Step,
    active: bool,
    paused: bool,
    onselect: Callback<usize>,
}

#[function_component]
fn StepRow(props: &StepRowProps) -> Html {
    let onclick = {
        let onselect = props.onselect.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| onselect.emit(index))
    };
    let progress = if props.active {
        // Keyed on the index so the animation restarts from 0% on every change
        let fill = if props.paused {
            html! { <div class="progress-fill" /> }
        } else {
            html! {
                <div
                    class="progress-fill running"
                    style={format!("animation-duration: {}s;", config::rotation_period_secs())}
                />
            }
        };
        html! {
            <div class="progress-track" key={props.index.to_string()}>{fill}</div>
        }
    } else {
        html! {}
    };
    html! {
        <button type="button" class={classes!("step-row", props.active.then_some("active"))} {onclick}>
            <div class="step-bullet">{props.step.id}</div>
            <div class="step-body">
                <div class="step-title">{props.step.title}</div>
                <div class="step-desc">{props.step.description}</div>
                {progress}
            </div>
        </button>
    }
}

#[function_component]
pub fn InteractiveFeatures() -> Html {
    let rotation = use_state_eq(|| Rotation::new(STEPS.len()));
    let preload = use_state(|| Preload::pending(STEPS.len()));

    // Preload every step image once; late results after unmount are dropped
    {
        let preload = preload.clone();
        use_effect_with_deps(
            move |_| {
                let cancelled = Rc::new(Cell::new(false));
                {
                    let cancelled = cancelled.clone();
                    spawn_local(async move {
                        let sources: Vec<&'static str> = STEPS.iter().map(|s| s.image).collect();
                        let results = preload_all(&sources).await;
                        if cancelled.get() {
                            return;
                        }
                        for err in results.iter().filter_map(|r| r.as_ref().err()) {
                            log::warn!("Showcase falls back to gradient: {}", err);
                        }
                        let settled = Preload::settled(results.as_slice());
                        log::info!(
                            "Showcase preload settled: {}/{} images loaded",
                            settled.loaded_count(),
                            sources.len()
                        );
                        preload.set(settled);
                    });
                }
                move || cancelled.set(true)
            },
            (),
        );
    }

    // Rotation timer, rebuilt whenever the rotation changes so a click restarts the phase
    {
        let rotation = rotation.clone();
        let current = *rotation;
        use_effect_with_deps(
            move |current: &Rotation| {
                let interval = if current.is_paused() {
                    None
                } else {
                    let current = *current;
                    Some(gloo_timers::callback::Interval::new(
                        config::ROTATION_PERIOD_MS,
                        move || rotation.set(current.tick()),
                    ))
                };
                move || drop(interval)
            },
            current,
        );
    }

    let onmouseenter = {
        let rotation = rotation.clone();
        Callback::from(move |_: MouseEvent| rotation.set(rotation.pause()))
    };
    let onmouseleave = {
        let rotation = rotation.clone();
        Callback::from(move |_: MouseEvent| rotation.set(rotation.resume()))
    };
    let onselect = {
        let rotation = rotation.clone();
        Callback::from(move |index: usize| rotation.set(rotation.select(index)))
    };

    let active = rotation.active();
    let step = &STEPS[active];
    let panel = match ShowcasePanel::for_state(&preload, active) {
        ShowcasePanel::Skeleton => html! {
            <div class="preview-frame"><div class="preview-skeleton" /></div>
        },
        ShowcasePanel::Image(index) => {
            let onerror = {
                let preload = preload.clone();
                Callback::from(move |_: Event| {
                    log::warn!("Showcase image {} failed after preload", index);
                    preload.set(preload.mark_failed(index));
                })
            };
            html! {
                <img
                    key={format!("image-{}", index)}
                    class="preview-frame preview-image"
                    src={step.image}
                    alt={step.title}
                    {onerror}
                />
            }
        }
        ShowcasePanel::Fallback(index) => html! {
            <div
                key={format!("fallback-{}", index)}
                class="preview-frame preview-fallback"
                style={format!("background-image: {};", fallback_gradient(index))}
            >
                // Shown for permanent failures too
                <div class="fallback-caption">{"Aperçu en chargement…"}</div>
            </div>
        },
    };

    let showcase_css = r#"
        .showcase {
            position: relative;
            background: #000;
            padding: 8rem 0;
            overflow: hidden;
        }
        .showcase-glow {
            position: absolute;
            width: 520px;
            height: 520px;
            border-radius: 50%;
            background: rgba(59, 130, 246, 0.1);
            filter: blur(140px);
            pointer-events: none;
        }
        .showcase-glow.top { top: -10rem; left: -10rem; }
        .showcase-glow.bottom { bottom: -11rem; right: -11rem; }
        .showcase-grid {
            position: relative;
            z-index: 1;
            max-width: 80rem;
            margin: 0 auto;
            padding: 0 1.5rem;
            display: grid;
            grid-template-columns: 5fr 7fr;
            gap: 4rem;
            align-items: center;
        }
        .showcase-pill {
            display: inline-flex;
            border-radius: 9999px;
            border: 1px solid rgba(255, 255, 255, 0.15);
            background: rgba(255, 255, 255, 0.05);
            padding: 0.5rem 1rem;
            font-size: 0.875rem;
            color: rgba(255, 255, 255, 0.85);
        }
        .showcase h2 {
            margin-top: 1.5rem;
            font-size: 3.75rem;
            font-weight: 600;
            line-height: 1.05;
            letter-spacing: -0.02em;
        }
        .showcase h2 .muted { color: rgba(255, 255, 255, 0.45); }
        .step-list {
            margin-top: 2.5rem;
            display: flex;
            flex-direction: column;
            gap: 1.75rem;
        }
        .step-row {
            display: flex;
            gap: 1.5rem;
            align-items: flex-start;
            width: 100%;
            text-align: left;
            background: none;
            border: none;
            cursor: pointer;
            color: inherit;
        }
        .step-bullet {
            flex-shrink: 0;
            height: 2.75rem;
            width: 2.75rem;
            border-radius: 50%;
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 0.875rem;
            font-weight: 600;
            color: rgba(255, 255, 255, 0.45);
            background: rgba(255, 255, 255, 0.1);
        }
        .step-row.active .step-bullet {
            color: #fff;
            background: #2F80FF;
            box-shadow: 0 0 0 6px rgba(47, 128, 255, 0.14);
        }
        .step-title {
            font-size: 1.25rem;
            font-weight: 500;
            color: rgba(255, 255, 255, 0.35);
        }
        .step-row.active .step-title { color: #fff; }
        .step-desc {
            margin-top: 0.5rem;
            color: rgba(255, 255, 255, 0.55);
        }
        .progress-track {
            margin-top: 1.25rem;
            height: 6px;
            width: 320px;
            max-width: 100%;
            border-radius: 9999px;
            background: rgba(255, 255, 255, 0.1);
            overflow: hidden;
        }
        .progress-fill {
            height: 100%;
            width: 0%;
            border-radius: 9999px;
            background: #2F80FF;
        }
        .progress-fill.running {
            animation-name: showcase-progress;
            animation-timing-function: linear;
            animation-fill-mode: forwards;
        }
        @keyframes showcase-progress {
            from { width: 0%; }
            to { width: 100%; }
        }
        .preview-outer {
            position: relative;
            border-radius: 38px;
            overflow: hidden;
            border: 1px solid rgba(255, 255, 255, 0.1);
            background: rgba(255, 255, 255, 0.04);
            padding: 2.5rem;
        }
        .preview-dots {
            position: absolute;
            inset: 0;
            opacity: 0.45;
            background-image: radial-gradient(rgba(255,255,255,0.10) 1px, transparent 1px);
            background-size: 14px 14px;
        }
        .preview-inner {
            position: relative;
            border-radius: 1.5rem;
            overflow: hidden;
            border: 1px solid rgba(255, 255, 255, 0.1);
            background: rgba(0, 0, 0, 0.4);
            box-shadow: 0 30px 90px rgba(0, 0, 0, 0.7);
        }
        .preview-frame {
            display: block;
            width: 100%;
            height: 640px;
        }
        .preview-image {
            object-fit: cover;
            animation: preview-in 0.45s ease-in-out;
        }
        .preview-skeleton {
            height: 100%;
            width: 100%;
            background: rgba(255, 255, 255, 0.05);
            animation: preview-pulse 2s ease-in-out infinite;
        }
        .preview-fallback {
            display: flex;
            align-items: center;
            justify-content: center;
            animation: preview-fade 0.35s;
        }
        .fallback-caption {
            color: rgba(255, 255, 255, 0.7);
            font-size: 0.875rem;
        }
        .preview-halo {
            position: absolute;
            inset: -3rem;
            border-radius: 48px;
            filter: blur(110px);
            background: #2F80FF;
            opacity: 0.25;
            pointer-events: none;
            animation: halo-in 0.6s ease-out;
        }
        @keyframes preview-in {
            from { opacity: 0; transform: translateX(22px) scale(0.995); }
            to { opacity: 1; transform: none; }
        }
        @keyframes preview-fade { from { opacity: 0; } to { opacity: 1; } }
        @keyframes preview-pulse { 50% { opacity: 0.5; } }
        @keyframes halo-in { from { opacity: 0.14; } to { opacity: 0.25; } }
        @media (max-width: 1024px) {
            .showcase-grid { grid-template-columns: 1fr; }
            .showcase h2 { font-size: 2.25rem; }
            .preview-frame { height: 520px; }
            .preview-outer { padding: 1.5rem; }
        }
    "#;

    html! {
        <section class="showcase">
            <style>{showcase_css}</style>
            <div class="showcase-glow top" />
            <div class="showcase-glow bottom" />
            <div class="showcase-grid">
                <div class="showcase-controls" {onmouseenter} {onmouseleave}>
                    <div class="showcase-pill">{"Focus"}</div>
                    <h2>
                        {"Ce que "}<span class="muted">{"vous trouverez"}</span>
                        <br />
                        {"dans FOCUS"}
                    </h2>
                    <div class="step-list">
                        { for STEPS.iter().enumerate().map(|(index, step)| html! {
                            <StepRow
                                key={step.id}
                                {index}
                                step={*step}
                                active={index == active}
                                paused={rotation.is_paused()}
                                onselect={onselect.clone()}
                            />
                        }) }
                    </div>
                </div>
                <div class="showcase-preview" style="position: relative;">
                    <div class="preview-outer">
                        <div class="preview-dots" />
                        <div class="preview-inner">{panel}</div>
                    </div>
                    <div class="preview-halo" key={format!("halo-{}", active)} />
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_by_one_and_wraps() {
        let mut rotation = Rotation::new(3);
        let mut seen = Vec::new();
        for _ in 0..5 {
            rotation = rotation.tick();
            seen.push(rotation.active());
        }
        assert_eq!(seen, vec![1, 2, 0, 1, 2]);
    }

    #[test]
    fn paused_rotation_ignores_ticks() {
        let mut rotation = Rotation::new(3).select(1).pause();
        for _ in 0..10 {
            rotation = rotation.tick();
        }
        assert_eq!(rotation.active(), 1);
        assert_eq!(rotation.resume().tick().active(), 2);
    }

    #[test]
    fn select_sets_active_regardless_of_pause() {
        assert_eq!(Rotation::new(3).select(2).active(), 2);
        assert_eq!(Rotation::new(3).pause().select(2).active(), 2);
        assert!(Rotation::new(3).pause().select(2).is_paused());
    }

    #[test]
    fn selecting_active_index_is_a_no_op() {
        let rotation = Rotation::new(3).select(1);
        assert_eq!(rotation.select(1), rotation);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let rotation = Rotation::new(3).select(1);
        assert_eq!(rotation.select(3), rotation);
    }

    #[test]
    fn settled_preload_has_exactly_one_outcome_per_item() {
        let results: Vec<Result<(), &str>> = vec![Ok(()), Err("404"), Ok(())];
        let preload = Preload::settled(results.as_slice());
        assert!(preload.is_ready());
        for index in 0..results.len() {
            assert_ne!(preload.is_loaded(index), preload.is_failed(index));
        }
        assert_eq!(preload.loaded_count(), 2);
        assert!(preload.is_failed(1));
    }

    #[test]
    fn pending_preload_shows_skeleton() {
        let preload = Preload::pending(3);
        assert!(!preload.is_ready());
        assert_eq!(ShowcasePanel::for_state(&preload, 0), ShowcasePanel::Skeleton);
    }

    #[test]
    fn panel_follows_active_image_status() {
        let preload = Preload::settled(&[Ok(()), Err(())]);
        assert_eq!(ShowcasePanel::for_state(&preload, 0), ShowcasePanel::Image(0));
        assert_eq!(ShowcasePanel::for_state(&preload, 1), ShowcasePanel::Fallback(1));
    }

    #[test]
    fn late_image_error_switches_to_fallback() {
        let preload = Preload::settled::<()>(&[Ok(()), Ok(())]).mark_failed(0);
        assert_eq!(preload.status(0), ImageStatus::Failed);
        assert_eq!(ShowcasePanel::for_state(&preload, 0), ShowcasePanel::Fallback(0));
        assert!(preload.is_loaded(1));
    }

    #[test]
    fn fallback_gradient_wraps_to_first() {
        assert_eq!(fallback_gradient(1), FALLBACK_GRADIENTS[1]);
        assert_eq!(fallback_gradient(7), FALLBACK_GRADIENTS[0]);
    }
}
