use crate::components::icons::{ArrowUpRight, Cross, ThemeGlyph};
use crate::content::{Destination, Theme, THEMES};
use crate::utils::listener::WindowListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

/// The theme whose detail overlay is open, if any. Selecting replaces, never stacks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThemeSelection(Option<&'static Theme>);

impl ThemeSelection {
    pub fn select(self, theme: &'static Theme) -> Self {
        ThemeSelection(Some(theme))
    }

    pub fn clear(self) -> Self {
        ThemeSelection(None)
    }

    pub fn selected(&self) -> Option<&'static Theme> {
        self.0
    }

    pub fn is_open(&self) -> bool {
        self.0.is_some()
    }
}

#[derive(Properties, PartialEq)]
struct ThemeTileProps {
    theme: &'static Theme,
    onselect: Callback<&'static Theme>,
}

#[function_component]
fn ThemeTile(props: &ThemeTileProps) -> Html {
    let theme = props.theme;
    let onclick = {
        let onselect = props.onselect.clone();
        Callback::from(move |_: MouseEvent| onselect.emit(theme))
    };
    html! {
        <div class={classes!("theme-tile", theme.size.class())} {onclick}>
            <div class="theme-tile-body">
                <div class="theme-tile-top">
                    <div class="theme-icon"><ThemeGlyph icon={theme.icon} /></div>
                    <ArrowUpRight class="theme-arrow" size={24} />
                </div>
                <div class="theme-caption">
                    <h3>{theme.title}</h3>
                    <p>{theme.details}</p>
                </div>
            </div>
            <div class="theme-preview">
                <div class="theme-window">
                    <div class="theme-window-bar">
                        <span class="mini-dot red" />
                        <span class="mini-dot yellow" />
                        <span class="mini-dot green" />
                    </div>
                    <img src={theme.image} alt="" />
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ThemeModalProps {
    theme: &'static Theme,
    onclose: Callback<()>,
}

#[function_component]
fn ThemeModal(props: &ThemeModalProps) -> Html {
    let theme = props.theme;
    let onclose = props.onclose.reform(|_: MouseEvent| ());
    html! {
        <div class="theme-modal" role="dialog" aria-modal="true">
            <div class="theme-modal-backdrop" onclick={onclose.clone()} />
            <div class="theme-modal-panel">
                <button class="theme-modal-close" aria-label="Fermer" onclick={onclose}>
                    <Cross size={24} />
                </button>
                <div class="theme-modal-head">
                    <div class="theme-icon large"><ThemeGlyph icon={theme.icon} /></div>
                    <h3>{theme.title}</h3>
                </div>
                <p>{theme.details}</p>
                <a href={Destination::Checkout.url()} class="theme-modal-cta">
                    {"Accéder au module "}
                    <ArrowUpRight size={20} />
                </a>
            </div>
        </div>
    }
}

#[function_component]
pub fn ThematicGrid() -> Html {
    let selection = use_state_eq(ThemeSelection::default);
    let is_open = selection.is_open();

    // Escape closes the overlay; the listener only exists while it is open
    {
        let selection = selection.clone();
        use_effect_with_deps(
            move |is_open: &bool| {
                let listener = if *is_open {
                    WindowListener::new("keydown", move |event| {
                        let is_escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .map_or(false, |e| e.key() == "Escape");
                        if is_escape {
                            selection.set(ThemeSelection::default());
                        }
                    })
                    .map_err(|e| log::warn!("Escape won't close the theme modal: {}", e))
                    .ok()
                } else {
                    None
                };
                move || drop(listener)
            },
            is_open,
        );
    }

    let onselect = {
        let selection = selection.clone();
        Callback::from(move |theme: &'static Theme| {
            log::debug!("Opening theme '{}'", theme.id);
            selection.set(selection.select(theme));
        })
    };
    let onclose = {
        let selection = selection.clone();
        Callback::from(move |_: ()| selection.set(selection.clear()))
    };

    let grid_css = r#"
        .thematic {
            background: #fff;
            color: #030712;
            padding: 8rem 1.5rem;
        }
        .thematic-inner {
            max-width: 80rem;
            margin: 0 auto;
        }
        .thematic-header {
            text-align: center;
            margin-bottom: 6rem;
        }
        .theme-grid {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            grid-auto-rows: 300px;
            gap: 1.5rem;
        }
        .tile-large { grid-column: span 2; grid-row: span 2; }
        .tile-small { grid-column: span 1; grid-row: span 1; }
        .tile-wide { grid-column: span 3; grid-row: span 1; }
        .theme-tile {
            position: relative;
            overflow: hidden;
            padding: 2rem;
            border-radius: 32px;
            background: #fff;
            border: 1px solid #e5e7eb;
            box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
            cursor: pointer;
            transition: all 0.3s;
        }
        .theme-tile:hover {
            transform: scale(1.01);
            box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
        }
        .theme-tile-body {
            position: relative;
            z-index: 1;
            height: 100%;
            display: flex;
            flex-direction: column;
            justify-content: space-between;
        }
        .theme-tile-top {
            display: flex;
            justify-content: space-between;
            align-items: flex-start;
        }
        .theme-icon {
            padding: 0.75rem;
            border-radius: 1rem;
            background: #f9fafb;
            border: 1px solid #f3f4f6;
            transition: transform 0.3s;
        }
        .theme-icon.large { padding: 1rem; border-color: #e5e7eb; }
        .theme-tile:hover .theme-icon { transform: scale(1.1); }
        .theme-arrow { color: #d1d5db; transition: color 0.3s; }
        .theme-tile:hover .theme-arrow { color: #030712; }
        .glyph-pink { color: #ec4899; }
        .glyph-blue { color: #3b82f6; }
        .glyph-purple { color: #a855f7; }
        .glyph-amber { color: #f59e0b; }
        .theme-caption {
            display: inline-block;
            max-width: fit-content;
            padding: 0.5rem;
            border-radius: 0.75rem;
            background: rgba(255, 255, 255, 0.6);
            backdrop-filter: blur(4px);
        }
        .theme-caption h3 {
            margin-bottom: 0.25rem;
            font-size: 1.5rem;
            font-weight: 700;
        }
        .theme-caption p {
            color: #6b7280;
            font-size: 0.875rem;
            display: -webkit-box;
            -webkit-line-clamp: 1;
            -webkit-box-orient: vertical;
            overflow: hidden;
        }
        .theme-preview {
            position: absolute;
            inset: 0;
            z-index: 0;
            padding: 3rem 0 0 8rem;
            opacity: 0.4;
            transition: all 0.7s;
        }
        .theme-tile:hover .theme-preview {
            opacity: 1;
            transform: scale(1.05);
        }
        .theme-window {
            width: 100%;
            height: 100%;
            overflow: hidden;
            border-top-left-radius: 1.5rem;
            border-left: 1px solid #e5e7eb;
            border-top: 1px solid #e5e7eb;
            background: #fff;
            box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
        }
        .theme-window-bar {
            display: flex;
            align-items: center;
            gap: 0.375rem;
            padding: 0.5rem 0.75rem;
            border-bottom: 1px solid #f3f4f6;
            background: rgba(249, 250, 251, 0.5);
        }
        .mini-dot { height: 6px; width: 6px; border-radius: 50%; }
        .mini-dot.red { background: #f87171; }
        .mini-dot.yellow { background: #facc15; }
        .mini-dot.green { background: #4ade80; }
        .theme-window img {
            width: 100%;
            height: 100%;
            object-fit: cover;
        }
        .theme-modal {
            position: fixed;
            inset: 0;
            z-index: 100;
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 1.5rem;
        }
        .theme-modal-backdrop {
            position: absolute;
            inset: 0;
            background: rgba(0, 0, 0, 0.6);
            backdrop-filter: blur(4px);
            animation: modal-fade 0.2s;
        }
        .theme-modal-panel {
            position: relative;
            z-index: 110;
            width: 100%;
            max-width: 42rem;
            padding: 3.5rem;
            border-radius: 40px;
            background: #fff;
            box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
            animation: modal-pop 0.2s;
        }
        .theme-modal-panel > * + * { margin-top: 1.5rem; }
        .theme-modal-close {
            position: absolute;
            top: 2rem;
            right: 2rem;
            height: 3rem;
            width: 3rem;
            border-radius: 50%;
            background: #f3f4f6;
            border: 1px solid #e5e7eb;
            color: #111827;
            display: flex;
            align-items: center;
            justify-content: center;
            cursor: pointer;
        }
        .theme-modal-close:hover { background: #e5e7eb; }
        .theme-modal-head {
            display: flex;
            align-items: center;
            gap: 1.25rem;
        }
        .theme-modal-head h3 { font-size: 1.875rem; font-weight: 700; }
        .theme-modal-panel p {
            color: #4b5563;
            font-size: 1.125rem;
            line-height: 1.6;
        }
        .theme-modal-cta {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            border-radius: 9999px;
            background: #000;
            color: #fff;
            padding: 1rem 2rem;
            font-weight: 700;
            text-decoration: none;
        }
        .theme-modal-cta:hover { background: #111827; }
        @keyframes modal-fade { from { opacity: 0; } to { opacity: 1; } }
        @keyframes modal-pop {
            from { opacity: 0; transform: scale(0.95); }
            to { opacity: 1; transform: none; }
        }
        @media (max-width: 768px) {
            .theme-grid { grid-template-columns: 1fr; }
            .tile-large, .tile-small, .tile-wide { grid-column: span 1; grid-row: span 1; }
            .theme-modal-panel { padding: 2.5rem; }
        }
    "#;

    let modal = match selection.selected() {
        Some(theme) => html! { <ThemeModal {theme} {onclose} /> },
        None => html! {},
    };

    html! {
        <section class="thematic" id="cours">
            <style>{grid_css}</style>
            <div class="thematic-inner">
                <div class="thematic-header">
                    <div class="section-pill" style="margin-bottom: 1.5rem;">{"Votre business avant tout !"}</div>
                    <h2 class="section-title">
                        <span class="gradient-text">{"Découvrez"}</span>{" notre"}
                        <br />
                        {"plateforme"}
                    </h2>
                </div>
                <div class="theme-grid">
                    { for THEMES.iter().map(|theme| html! {
                        <ThemeTile key={theme.id} {theme} onselect={onselect.clone()} />
                    }) }
                </div>
            </div>
            {modal}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::find_theme;

    fn theme(id: &str) -> &'static Theme {
        find_theme(id).unwrap()
    }

    #[test]
    fn starts_closed() {
        assert!(!ThemeSelection::default().is_open());
    }

    #[test]
    fn backdrop_click_clears_selection() {
        let open = ThemeSelection::default().select(theme("ecommerce"));
        assert_eq!(open.selected().map(|t| t.id), Some("ecommerce"));
        assert_eq!(open.clear().selected(), None);
    }

    #[test]
    fn second_selection_replaces_first() {
        let selection = ThemeSelection::default()
            .select(theme("ecommerce"))
            .select(theme("ia"));
        assert_eq!(selection.selected().map(|t| t.id), Some("ia"));
        assert_eq!(selection.clear(), ThemeSelection::default());
    }
}
