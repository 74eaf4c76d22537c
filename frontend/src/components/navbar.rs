use crate::config;
use crate::content::Destination;
use crate::utils::listener::WindowListener;
use yew::prelude::*;

/// Decides navbar visibility from the direction of the latest scroll step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollVisibility {
    last_offset: f64,
    visible: bool,
    dead_zone: f64,
}

impl ScrollVisibility {
    pub fn new(dead_zone: f64) -> Self {
        Self {
            last_offset: 0.0,
            visible: true,
            dead_zone,
        }
    }

    /// Feeds the current vertical offset and returns the resulting visibility.
    /// Scrolling up always reveals; scrolling down hides only past the dead zone.
    pub fn observe(&mut self, offset: f64) -> bool {
        if offset < self.last_offset {
            self.visible = true;
        } else if offset > self.last_offset && offset > self.dead_zone {
            self.visible = false;
        }
        self.last_offset = offset;
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for ScrollVisibility {
    fn default() -> Self {
        Self::new(config::NAV_DEAD_ZONE_PX)
    }
}

#[derive(Properties, PartialEq)]
struct NavItemProps {
    label: &'static str,
    href: &'static str,
}

#[function_component]
fn NavItem(props: &NavItemProps) -> Html {
    html! {
        <a href={props.href} class="nav-item">{props.label}</a>
    }
}

#[function_component]
pub fn Navbar() -> Html {
    let visible = use_state(|| true);
    let tracker = use_mut_ref(ScrollVisibility::default);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::passive("scroll", move |_| {
                    if let Some(offset) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                        let mut tracker = tracker.borrow_mut();
                        let was_visible = tracker.is_visible();
                        let now_visible = tracker.observe(offset);
                        // Only re-render on a flip, not on every scroll tick
                        if now_visible != was_visible {
                            log::debug!("Navbar visible: {} at offset {}", now_visible, offset);
                            visible.set(now_visible);
                        }
                    }
                });
                let listener = match listener {
                    Ok(listener) => Some(listener),
                    Err(e) => {
                        log::warn!("Navbar stays pinned: {}", e);
                        None
                    }
                };
                move || drop(listener)
            },
            (),
        );
    }
    let navbar_css = r#"
        .navbar {
            position: fixed;
            top: 1.5rem;
            left: 0;
            right: 0;
            z-index: 50;
            padding: 0 1rem;
            transition: transform 0.3s ease-out;
        }
        .navbar.hidden {
            transform: translateY(-8rem);
        }
        .navbar nav {
            max-width: 72rem;
            margin: 0 auto;
            display: flex;
            align-items: center;
            justify-content: space-between;
            padding: 0.75rem 1.5rem;
            border-radius: 1rem;
            background: rgba(0, 0, 0, 0.6);
            backdrop-filter: blur(24px);
            border: 1px solid rgba(255, 255, 255, 0.1);
            box-shadow: 0 10px 40px rgba(0, 0, 0, 0.6);
        }
        .nav-logo {
            font-size: 1.125rem;
            font-weight: 600;
            letter-spacing: -0.02em;
            color: #fff;
        }
        .nav-links {
            display: flex;
            align-items: center;
            gap: 0.5rem;
        }
        .nav-item {
            padding: 0.5rem 1rem;
            border-radius: 0.75rem;
            font-size: 0.875rem;
            font-weight: 500;
            color: #d1d5db;
            text-decoration: none;
            transition: all 0.2s;
        }
        .nav-item:hover {
            color: #fff;
            background: rgba(255, 255, 255, 0.1);
        }
        .nav-client {
            margin-left: 0.5rem;
            padding: 0.5rem 1rem;
            border-radius: 0.75rem;
            background: #fff;
            color: #000;
            font-size: 0.875rem;
            font-weight: 500;
            text-decoration: none;
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
            transition: all 0.2s;
        }
        .nav-client:hover {
            transform: translateY(-1px);
            box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
        }
        @media (max-width: 768px) {
            .nav-links {
                display: none;
            }
        }
    "#;
    html! {
        <header class={classes!("navbar", (!*visible).then_some("hidden"))}>
            <style>{navbar_css}</style>
            <nav>
                <div class="nav-logo">{"FOCUS"}</div>
                <div class="nav-links">
                    <NavItem label="Le Club" href="#club" />
                    <NavItem label="Cours" href="#cours" />
                    <a href={Destination::ClientArea.url()} class="nav-client">
                        {"Espace Client"}
                    </a>
                </div>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(offsets: &[f64]) -> Vec<bool> {
        let mut tracker = ScrollVisibility::new(80.0);
        offsets.iter().map(|&offset| tracker.observe(offset)).collect()
    }

    #[test]
    fn starts_visible() {
        assert!(ScrollVisibility::default().is_visible());
    }

    #[test]
    fn hides_past_dead_zone_and_reveals_on_scroll_up() {
        assert_eq!(replay(&[0.0, 50.0, 120.0, 90.0]), vec![true, true, false, true]);
    }

    #[test]
    fn scrolling_down_inside_dead_zone_keeps_bar() {
        assert_eq!(replay(&[10.0, 40.0, 80.0]), vec![true, true, true]);
    }

    #[test]
    fn standing_still_keeps_previous_state() {
        assert_eq!(replay(&[200.0, 200.0, 200.0]), vec![false, false, false]);
        assert_eq!(replay(&[200.0, 150.0, 150.0]), vec![false, true, true]);
    }

    #[test]
    fn scrolling_up_reveals_even_deep_in_page() {
        assert_eq!(replay(&[5000.0, 4999.0]), vec![false, true]);
    }
}
