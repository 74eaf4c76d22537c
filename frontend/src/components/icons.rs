use crate::content::ThemeIcon;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(18)]
    pub size: u32,
}

fn stroked(props: &IconProps, paths: Html) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            class={props.class.clone()}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths}
        </svg>
    }
}

#[function_component]
pub fn ArrowRight(props: &IconProps) -> Html {
    stroked(props, html! { <path d="M5 12h14m-7-7 7 7-7 7" /> })
}

#[function_component]
pub fn ArrowUpRight(props: &IconProps) -> Html {
    stroked(props, html! { <><path d="M7 17 17 7" /><path d="M9 7h8v8" /></> })
}

#[function_component]
pub fn Check(props: &IconProps) -> Html {
    stroked(props, html! { <path d="M20 6 9 17l-5-5" /> })
}

#[function_component]
pub fn Cross(props: &IconProps) -> Html {
    stroked(props, html! { <path d="M18 6 6 18M6 6l12 12" /> })
}

#[function_component]
pub fn Star(props: &IconProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg class={props.class.clone()} width={size.clone()} height={size} fill="#00B67A" viewBox="0 0 20 20" aria-hidden="true">
            <path d="M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeGlyphProps {
    pub icon: ThemeIcon,
    #[prop_or(24)]
    pub size: u32,
}

/// The pictogram shown on a thematic card and in its modal.
#[function_component]
pub fn ThemeGlyph(props: &ThemeGlyphProps) -> Html {
    let (class, paths) = match props.icon {
        ThemeIcon::Cart => (
            "glyph-pink",
            html! {
                <>
                    <circle cx="8" cy="21" r="1" />
                    <circle cx="19" cy="21" r="1" />
                    <path d="M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12" />
                </>
            },
        ),
        ThemeIcon::Target => (
            "glyph-blue",
            html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <circle cx="12" cy="12" r="6" />
                    <circle cx="12" cy="12" r="2" />
                </>
            },
        ),
        ThemeIcon::Cpu => (
            "glyph-purple",
            html! {
                <>
                    <rect x="4" y="4" width="16" height="16" rx="2" />
                    <rect x="9" y="9" width="6" height="6" />
                    <path d="M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2" />
                </>
            },
        ),
        ThemeIcon::Zap => (
            "glyph-amber",
            html! {
                <path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z" />
            },
        ),
    };
    let size = props.size.to_string();
    html! {
        <svg
            class={classes!("theme-glyph", class)}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths}
        </svg>
    }
}
