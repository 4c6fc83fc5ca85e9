use std::rc::Rc;

use js_sys::{Function, Object, Reflect};
use serde_json::json;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, AddEventListenerOptions, Document, Element, Event, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, ScrollBehavior,
    ScrollIntoViewOptions,
};
use yew::prelude::*;

use crate::config::{FollowerConfig, TrackerConfig, FALLBACK_SECTION};
use crate::content::{self, NavLink, SiteContent};
use crate::icons::{
    ArrowUpIcon, CheckCircleIcon, CloseIcon, GithubIcon, LinkedinIcon, MailIcon, MenuIcon,
};
use crate::logging::{log_event, LogLevel};
use crate::navigation::{self, MenuState, SectionScroller};
use crate::pointer::{FollowerFrame, InteractiveNode, PointerFollower, GROW_CLASS};
use crate::scroll::{ScrollMetrics, ScrollTracker, SectionLayout};
use crate::visibility::{Transition, VisibleSections};

const SECTION_SELECTOR: &str = ".animate-section";

fn document() -> Option<Document> {
    window()?.document()
}

struct DomLayout {
    document: Document,
}

impl SectionLayout for DomLayout {
    fn section_top(&self, id: &str) -> Option<f64> {
        let element = self.document.get_element_by_id(id)?;
        let element = element.dyn_into::<HtmlElement>().ok()?;
        Some(f64::from(element.offset_top()))
    }
}

struct DomScroller;

impl SectionScroller for DomScroller {
    fn scroll_to(&self, target: &str) -> bool {
        let Some(element) = document().and_then(|d| d.query_selector(target).ok().flatten()) else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

impl InteractiveNode for Element {
    fn tag_name(&self) -> String {
        Element::tag_name(self)
    }

    fn role(&self) -> Option<String> {
        self.get_attribute("role")
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element()
    }
}

fn scroll_metrics() -> Option<ScrollMetrics> {
    let win = window()?;
    let scroll_y = win.scroll_y().ok()?;
    let viewport_height = win.inner_height().ok().and_then(|value| value.as_f64())?;
    let document_height = win.document()?.body()?.offset_height();

    Some(ScrollMetrics {
        scroll_y,
        viewport_height,
        document_height: f64::from(document_height),
    })
}

/// Plays `frame` on `element` through `Element.animate`, then applies the
/// grow modifier.
fn animate_follower(element: &Element, frame: &FollowerFrame) {
    let keyframes = Object::new();
    let options = Object::new();
    let _ = Reflect::set(&keyframes, &JsValue::from_str("left"), &JsValue::from_str(&frame.left_css()));
    let _ = Reflect::set(&keyframes, &JsValue::from_str("top"), &JsValue::from_str(&frame.top_css()));
    let _ = Reflect::set(
        &options,
        &JsValue::from_str("duration"),
        &JsValue::from_f64(f64::from(frame.duration_ms)),
    );
    let _ = Reflect::set(&options, &JsValue::from_str("fill"), &JsValue::from_str(frame.fill.as_str()));

    if let Ok(animate) = Reflect::get(element, &JsValue::from_str("animate")) {
        if let Some(animate) = animate.dyn_ref::<Function>() {
            let _ = animate.call2(element, &keyframes, &options);
        }
    }

    let _ = element.class_list().toggle_with_force(GROW_CLASS, frame.grow);
}

fn log_registration_failure(listener: &str) {
    log_event(
        LogLevel::Warn,
        "listener_registration_failed",
        json!({ "listener": listener }),
    );
}

#[derive(Clone, Default, PartialEq)]
struct RevealState(VisibleSections);

impl Reducible for RevealState {
    type Action = String;

    fn reduce(self: Rc<Self>, id: String) -> Rc<Self> {
        let mut next = self.0.clone();
        match next.observe(&id, true) {
            Transition::Revealed => Rc::new(Self(next)),
            Transition::Unchanged => self,
        }
    }
}

#[derive(Properties, PartialEq)]
struct NavAnchorProps {
    href: AttrValue,
    #[prop_or_default]
    class: Classes,
    on_navigate: Callback<String>,
    #[prop_or_default]
    children: Html,
}

#[function_component(NavAnchor)]
fn nav_anchor(props: &NavAnchorProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_navigate.emit(href.to_string());
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            {props.children.clone()}
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct RevealSectionProps {
    id: AttrValue,
    #[prop_or_default]
    class: Classes,
    visible: bool,
    #[prop_or_default]
    children: Html,
}

#[function_component(RevealSection)]
fn reveal_section(props: &RevealSectionProps) -> Html {
    html! {
        <section
            id={props.id.clone()}
            class={classes!(
                props.class.clone(),
                "overflow-hidden",
                "animate-section",
                props.visible.then_some("is-visible")
            )}
        >
            {props.children.clone()}
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SkillCardProps {
    icon: AttrValue,
    title: AttrValue,
    #[prop_or_default]
    level: Option<AttrValue>,
    delay_ms: usize,
}

#[function_component(SkillCard)]
fn skill_card(props: &SkillCardProps) -> Html {
    html! {
        <div
            class="bg-white p-6 rounded-xl shadow-lg border border-gray-100 animate-child card-hover"
            style={delay_style(props.delay_ms)}
        >
            <div class="card-icon text-4xl text-blue-600 mb-3 flex justify-center">{props.icon.clone()}</div>
            <h3 class="text-lg font-semibold text-gray-800 text-center">{props.title.clone()}</h3>
            if let Some(level) = props.level.clone() {
                <p class="text-gray-500 text-center">{level}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SocialLinksProps {
    linkedin: AttrValue,
    github: AttrValue,
    #[prop_or_default]
    email: Option<AttrValue>,
    class: Classes,
}

#[function_component(SocialLinks)]
fn social_links(props: &SocialLinksProps) -> Html {
    html! {
        <div class={props.class.clone()}>
            <a href={props.linkedin.clone()} target="_blank" rel="noopener noreferrer" class="text-gray-500 hover:text-blue-700 social-icon-hover" aria-label="View my LinkedIn profile"><LinkedinIcon /></a>
            <a href={props.github.clone()} target="_blank" rel="noopener noreferrer" class="text-gray-500 hover:text-gray-900 social-icon-hover" aria-label="View my GitHub profile"><GithubIcon /></a>
            if let Some(email) = props.email.clone() {
                <a href={email} target="_blank" rel="noopener noreferrer" class="text-gray-500 hover:text-red-500 social-icon-hover" aria-label="Send me an email"><MailIcon /></a>
            }
        </div>
    }
}

fn delay_style(delay_ms: usize) -> String {
    format!("transition-delay: {delay_ms}ms;")
}

#[derive(Properties, PartialEq)]
struct AppProps {
    content: Rc<SiteContent>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let content = props.content.clone();
    let active_section = use_state_eq(|| FALLBACK_SECTION.to_string());
    let show_back_to_top = use_state_eq(|| false);
    let menu = use_state_eq(MenuState::default);
    let revealed = use_reducer(RevealState::default);
    let blob_ref = use_node_ref();

    {
        let content = content.clone();
        let active_section = active_section.clone();
        let show_back_to_top = show_back_to_top.clone();
        let revealed = revealed.clone();
        let blob_ref = blob_ref.clone();
        use_effect_with((), move |_| {
            let destructor: Box<dyn FnOnce()> = match (window(), document()) {
                (Some(win), Some(doc)) => {
                    let follower = PointerFollower::new(FollowerConfig::default());
                    let on_pointer_move = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                        let Some(blob) = blob_ref.cast::<Element>() else {
                            return;
                        };
                        let Some(pointer) = event.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        let target = event.target().and_then(|target| target.dyn_into::<Element>().ok());
                        let frame = follower.frame(pointer.client_x(), pointer.client_y(), target);
                        animate_follower(&blob, &frame);
                    });
                    if win
                        .add_event_listener_with_callback("pointermove", on_pointer_move.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log_registration_failure("pointermove");
                    }

                    let tracker = ScrollTracker::new(TrackerConfig::default());
                    let layout = DomLayout { document: doc.clone() };
                    let links: Vec<NavLink> = content.nav_links.clone();
                    let mut last_active = FALLBACK_SECTION.to_string();
                    let mut on_scroll_tick = move || {
                        let Some(metrics) = scroll_metrics() else {
                            return;
                        };
                        let snapshot = tracker.snapshot(metrics, &links, &layout);
                        if snapshot.active_section != last_active {
                            log_event(
                                LogLevel::Debug,
                                "active_section_changed",
                                json!({ "from": last_active, "to": snapshot.active_section, "scroll_y": metrics.scroll_y }),
                            );
                            last_active = snapshot.active_section.clone();
                        }
                        show_back_to_top.set(snapshot.show_back_to_top);
                        active_section.set(snapshot.active_section);
                    };
                    on_scroll_tick();
                    let on_scroll = Closure::<dyn FnMut()>::new(on_scroll_tick);
                    let scroll_options = AddEventListenerOptions::new();
                    scroll_options.set_passive(true);
                    if win
                        .add_event_listener_with_callback_and_add_event_listener_options(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                            &scroll_options,
                        )
                        .is_err()
                    {
                        log_registration_failure("scroll");
                    }

                    let mut ledger = VisibleSections::new();
                    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                let target = entry.target();
                                let id = target.id();
                                if ledger.observe(&id, entry.is_intersecting()) == Transition::Revealed {
                                    observer.unobserve(&target);
                                    log_event(LogLevel::Info, "section_revealed", json!({ "section": id }));
                                    revealed.dispatch(id);
                                }
                            }
                        },
                    );
                    let observer_init = IntersectionObserverInit::new();
                    observer_init.set_threshold(&JsValue::from_f64(tracker.config().visibility_threshold));
                    let observer =
                        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &observer_init).ok();
                    if observer.is_none() {
                        log_registration_failure("intersection");
                    }

                    let sections: Vec<Element> = doc
                        .query_selector_all(SECTION_SELECTOR)
                        .ok()
                        .map(|nodes| {
                            (0..nodes.length())
                                .filter_map(|index| nodes.get(index))
                                .filter_map(|node| node.dyn_into::<Element>().ok())
                                .collect()
                        })
                        .unwrap_or_default();
                    if let Some(observer) = observer.as_ref() {
                        for section in &sections {
                            observer.observe(section);
                        }
                    }

                    Box::new(move || {
                        let _ = win.remove_event_listener_with_callback(
                            "pointermove",
                            on_pointer_move.as_ref().unchecked_ref(),
                        );
                        let _ = win.remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                        if let Some(observer) = observer {
                            for section in &sections {
                                observer.unobserve(section);
                            }
                        }
                        drop(on_intersect);
                    })
                }
                _ => Box::new(|| ()),
            };

            move || destructor()
        });
    }

    let on_navigate = {
        let active_section = active_section.clone();
        let menu = menu.clone();
        Callback::from(move |target: String| {
            let outcome = navigation::navigate(&target, *menu, &DomScroller);
            log_event(
                LogLevel::Info,
                "navigate",
                json!({ "target": target, "found": outcome.activated.is_some() }),
            );
            if let Some(id) = outcome.activated {
                active_section.set(id);
            }
            menu.set(outcome.menu);
        })
    };

    let on_toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*menu).toggled();
            log_event(LogLevel::Debug, "menu_toggled", json!({ "open": next.is_open() }));
            menu.set(next);
        })
    };

    let on_back_to_top = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit("#home".to_string()))
    };

    let profile = &content.profile;
    let project = &content.project;
    let technical_count = content.technical_skills.len();
    let visible = |id: &str| revealed.0.is_visible(id);
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <>
            <div ref={blob_ref} class="aurora-blob"></div>
            <div class="bg-gray-50 min-h-screen text-gray-800 font-['Poppins',_sans-serif] antialiased relative z-10">
                <header class="bg-white/80 backdrop-blur-md sticky top-0 z-50 shadow-sm border-b border-gray-100">
                    <div class="container mx-auto px-6 py-4 flex justify-between items-center">
                        <NavAnchor href="#home" class="text-2xl font-bold text-blue-600" on_navigate={on_navigate.clone()}>
                            {profile.name.clone()}
                        </NavAnchor>
                        <nav class="hidden md:flex items-center space-x-8">
                            { for content.nav_links.iter().map(|link| html! {
                                <NavAnchor
                                    key={link.href.clone()}
                                    href={link.href.clone()}
                                    class={classes!(
                                        "nav-link", "text-gray-600", "hover:text-blue-600", "transition-colors",
                                        "duration-300", "font-medium",
                                        (*active_section == link.section_id()).then_some("nav-link-active")
                                    )}
                                    on_navigate={on_navigate.clone()}
                                >
                                    {link.label.clone()}
                                </NavAnchor>
                            }) }
                        </nav>
                        <button class="md:hidden z-50" aria-label="Toggle menu" onclick={on_toggle_menu}>
                            if menu.is_open() { <CloseIcon /> } else { <MenuIcon /> }
                        </button>
                    </div>
                    if menu.is_open() {
                        <div class="md:hidden fixed top-0 left-0 w-full h-screen bg-white flex flex-col items-center justify-center z-40">
                            <nav class="flex flex-col items-center space-y-8">
                                { for content.nav_links.iter().map(|link| html! {
                                    <NavAnchor
                                        key={link.href.clone()}
                                        href={link.href.clone()}
                                        class="text-2xl text-gray-700 hover:text-blue-600"
                                        on_navigate={on_navigate.clone()}
                                    >
                                        {link.label.clone()}
                                    </NavAnchor>
                                }) }
                            </nav>
                        </div>
                    }
                </header>

                <main>
                    <RevealSection id="home" class="relative pt-24 pb-32 bg-white" visible={visible("home")}>
                        <div class="container mx-auto px-6 text-center relative z-10">
                            <div class="w-36 h-48 rounded-3xl mx-auto mb-6 shadow-lg animate-child overflow-hidden" style={delay_style(0)}>
                                <img src={profile.image.clone()} alt={profile.image_alt.clone()} class="w-full h-full object-cover" />
                            </div>
                            <h1 class="text-4xl md:text-6xl font-extrabold text-gray-900 leading-tight animate-child" style={delay_style(100)}>
                                {profile.name.clone()}
                            </h1>
                            <p class="mt-4 text-lg md:text-xl text-gray-600 max-w-2xl mx-auto animate-child" style={delay_style(200)}>
                                {profile.tagline.clone()}
                            </p>
                            <div style={delay_style(300)} class="animate-child">
                                <SocialLinks
                                    class={classes!("mt-8", "flex", "justify-center", "items-center", "space-x-5")}
                                    linkedin={profile.linkedin.clone()}
                                    github={profile.github.clone()}
                                    email={Some(AttrValue::from(profile.email_compose.clone()))}
                                />
                            </div>
                            <div class="mt-10 animate-child" style={delay_style(400)}>
                                <NavAnchor
                                    href="#projects"
                                    class="bg-blue-600 text-white font-bold py-3 px-8 rounded-full shadow-lg transition-all duration-300 interactive-hover"
                                    on_navigate={on_navigate.clone()}
                                >
                                    {"View My Work"}
                                </NavAnchor>
                            </div>
                        </div>
                    </RevealSection>

                    <RevealSection id="about" class="py-20" visible={visible("about")}>
                        <div class="container mx-auto px-6">
                            <h2 class="text-3xl font-bold text-center mb-12 animate-child" style={delay_style(0)}>{"About Me"}</h2>
                            <div class="max-w-4xl mx-auto grid md:grid-cols-2 gap-12 items-center">
                                <div class="text-lg text-gray-600 space-y-4 animate-child" style={delay_style(100)}>
                                    <p>{"I am currently pursuing a B.Tech in Computer Science and Engineering, driven by a deep curiosity for technology and its potential to shape the future. My goal is to leverage my skills to build impactful and user-centric applications."}</p>
                                    <p>
                                        {"My academic journey is marked by a strong foundation, highlighted by achieving a "}
                                        <span class="font-bold text-blue-600">{"100% score in my 12th board exams"}</span>
                                        {". I am constantly seeking to expand my knowledge and am currently enrolled in Harvard's renowned "}
                                        <span class="font-semibold text-gray-800">{"CS50x course"}</span>
                                        {" to sharpen my problem-solving abilities."}
                                    </p>
                                </div>
                                <div class="bg-white p-8 rounded-xl shadow-lg border border-gray-100 animate-child card-hover" style={delay_style(200)}>
                                    <h3 class="text-xl font-semibold text-gray-800 mb-4">{"Interests & Aspirations"}</h3>
                                    <p class="text-gray-600">{"I am fascinated by the high-demand fields that are revolutionizing the tech industry:"}</p>
                                    <ul class="mt-4 space-y-2">
                                        { for content.about_interests().iter().map(|interest| html! {
                                            <li key={interest.title.clone()} class="flex items-center">
                                                <span class="text-xl mr-3">{interest.icon.clone()}</span>
                                                <span class="text-gray-700">{interest.title.clone()}</span>
                                            </li>
                                        }) }
                                    </ul>
                                </div>
                            </div>
                        </div>
                    </RevealSection>

                    <RevealSection id="skills" class="py-20 bg-white" visible={visible("skills")}>
                        <div class="container mx-auto px-6">
                            <h2 class="text-3xl font-bold text-center mb-12 animate-child" style={delay_style(0)}>{"Technical Skills & Interests"}</h2>
                            <div class="grid grid-cols-2 md:grid-cols-3 gap-8 max-w-4xl mx-auto">
                                { for content.technical_skills.iter().enumerate().map(|(index, skill)| html! {
                                    <SkillCard
                                        key={skill.title.clone()}
                                        icon={skill.icon.clone()}
                                        title={skill.title.clone()}
                                        level={skill.level.clone().map(AttrValue::from)}
                                        delay_ms={content::skill_card_delay_ms(index)}
                                    />
                                }) }
                            </div>
                            <p class="text-center mt-12 text-gray-500 animate-child" style={delay_style(content::interstitial_delay_ms(technical_count))}>
                                {"I am also keenly interested in the following high-demand fields:"}
                            </p>
                            <div class="grid grid-cols-2 md:grid-cols-3 gap-8 max-w-4xl mx-auto mt-8">
                                { for content.interests.iter().enumerate().map(|(index, interest)| html! {
                                    <SkillCard
                                        key={interest.title.clone()}
                                        icon={interest.icon.clone()}
                                        title={interest.title.clone()}
                                        delay_ms={content::interest_card_delay_ms(technical_count, index)}
                                    />
                                }) }
                            </div>
                        </div>
                    </RevealSection>

                    <RevealSection id="projects" class="py-20" visible={visible("projects")}>
                        <div class="container mx-auto px-6">
                            <h2 class="text-3xl font-bold text-center mb-12 animate-child" style={delay_style(0)}>{"Featured Project"}</h2>
                            <div class="max-w-4xl mx-auto bg-white rounded-2xl shadow-xl overflow-hidden border border-gray-100 animate-child card-hover" style={delay_style(100)}>
                                <div class="md:flex">
                                    <div class="md:w-1/3 bg-gradient-to-br from-blue-500 to-indigo-600 p-8 flex flex-col justify-center items-center text-white text-center">
                                        <h3 class="text-3xl font-bold">{project.name.clone()}</h3>
                                        <p class="mt-2 text-blue-100">{project.tagline.clone()}</p>
                                        <div class="mt-6 text-sm font-semibold bg-blue-100 text-blue-800 py-1 px-3 rounded-full">{project.stack.clone()}</div>
                                    </div>
                                    <div class="p-8 md:w-2/3">
                                        <p class="text-gray-600 mb-6">{project.summary.clone()}</p>
                                        <h4 class="font-semibold text-gray-800 mb-3">{"Key Features:"}</h4>
                                        <ul class="grid grid-cols-1 sm:grid-cols-2 gap-x-6 gap-y-3 text-sm">
                                            { for project.features.iter().map(|feature| html! {
                                                <li key={feature.clone()} class="flex items-start">
                                                    <CheckCircleIcon />
                                                    <span class="text-gray-700">{feature.clone()}</span>
                                                </li>
                                            }) }
                                        </ul>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </RevealSection>

                    <RevealSection id="contact" class="py-20 bg-white" visible={visible("contact")}>
                        <div class="container mx-auto px-6 text-center">
                            <h2 class="text-3xl font-bold mb-4 animate-child" style={delay_style(0)}>{"Get In Touch"}</h2>
                            <p class="text-gray-600 max-w-lg mx-auto mb-8 animate-child" style={delay_style(100)}>
                                {"I'm actively looking for internship opportunities and am always open to discussing new projects, creative ideas, or ways to contribute to an amazing team. Feel free to reach out!"}
                            </p>
                            <a
                                href={profile.email_compose.clone()}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center bg-blue-600 text-white font-bold py-3 px-8 rounded-full shadow-lg transition-all duration-300 interactive-hover animate-child"
                                style={delay_style(200)}
                            >
                                <MailIcon class="mr-3" />
                                {"Say Hello"}
                            </a>
                            <div style={delay_style(300)} class="animate-child">
                                <SocialLinks
                                    class={classes!("mt-10", "flex", "justify-center", "items-center", "space-x-6")}
                                    linkedin={profile.linkedin.clone()}
                                    github={profile.github.clone()}
                                />
                            </div>
                        </div>
                    </RevealSection>
                </main>

                <footer class="bg-gray-100 border-t border-gray-200">
                    <div class="container mx-auto px-6 py-6 text-center text-gray-500">
                        <p>{format!("© {year} {}. All Rights Reserved.", profile.name)}</p>
                    </div>
                </footer>

                <button
                    onclick={on_back_to_top}
                    class={classes!(
                        "fixed", "bottom-8", "right-8", "bg-blue-600", "text-white", "p-3", "rounded-full",
                        "shadow-lg", "hover:bg-blue-700", "transition-all", "duration-300", "z-50",
                        if *show_back_to_top {
                            classes!("opacity-100", "translate-y-0")
                        } else {
                            classes!("opacity-0", "translate-y-4", "pointer-events-none")
                        }
                    )}
                    aria-label="Back to top"
                >
                    <ArrowUpIcon />
                </button>
            </div>
        </>
    }
}

pub fn run() {
    let content = match SiteContent::embedded() {
        Ok(content) => Rc::new(content),
        Err(error) => {
            log_event(LogLevel::Error, "content_invalid", json!({ "error": error.to_string() }));
            return;
        }
    };

    let Some(root) = document().and_then(|d| d.get_element_by_id("app")) else {
        log_event(LogLevel::Error, "mount_point_missing", json!({ "id": "app" }));
        return;
    };

    log_event(
        LogLevel::Info,
        "app_mounted",
        json!({ "sections": content.nav_links.len() }),
    );
    yew::Renderer::<App>::with_root_and_props(root, AppProps { content }).render();
}
