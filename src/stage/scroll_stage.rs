use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, ResizeObserver, Window};
use yew::prelude::*;
use yew::functional::UseStateSetter;

use super::driver::{MotionFrame, StageDriver};
use super::sections::{About, Contact, Hero, ProjectShowcase, PROJECTS};
use super::table::{self, ElementId};
use crate::config;
use crate::motion::MotionMapper;
use crate::scroll::{FrameLoop, ProgressTracker, ScrollMetrics, StageLayout};

// The track is sized to its content so the ResizeObserver on it fires when
// sections grow, not only when the viewport does.
const STAGE_CSS: &str = r#"
.scroll-progress {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    height: 2px;
    background: var(--primary);
    transform-origin: left;
    z-index: 50;
}

.stage-frame {
    position: fixed;
    top: 0;
    left: 0;
    width: 100vw;
    height: 100vh;
    overflow: hidden;
}

.stage-track {
    display: flex;
    width: max-content;
    height: 100%;
    will-change: transform;
}

.stage-section {
    position: relative;
    min-width: 100vw;
    height: 100vh;
    flex-shrink: 0;
    display: flex;
    align-items: center;
}

.stage-section.accent {
    background: var(--accent);
}

.hero {
    justify-content: center;
}

.hero-intro {
    text-align: center;
    z-index: 10;
    opacity: 0;
    animation: heroIntro 1.2s ease-out forwards;
}

.hero-monogram {
    width: 16rem;
    height: 16rem;
    margin: 0 auto 3rem;
}

.hero-monogram svg {
    width: 100%;
    height: 100%;
}

.hero-monogram text {
    font-family: var(--serif);
    font-size: 4.5rem;
}

.hero h1 {
    font-family: var(--serif);
    font-size: 6rem;
    font-weight: 400;
    margin: 0 0 1rem;
}

.hero-tagline {
    font-size: 1.25rem;
    letter-spacing: 0.05em;
    color: var(--muted);
}

.hero-hint {
    position: absolute;
    right: 3rem;
    top: 50%;
    transform: translateY(-50%);
}

.hero-hint-inner {
    display: flex;
    align-items: center;
    gap: 1rem;
    opacity: 0;
    animation: fadeIn 1s ease-out 1s forwards;
}

.hero-hint-line {
    width: 3rem;
    height: 1px;
    background: var(--foreground);
    animation: pulse 2s ease-in-out infinite;
}

.hero-hint p {
    font-size: 0.875rem;
    letter-spacing: 0.2em;
}

.split {
    display: flex;
    width: 100%;
    height: 100%;
}

.media {
    position: relative;
    height: 100%;
    overflow: hidden;
}

.media img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.copy {
    display: flex;
    align-items: center;
    justify-content: center;
    height: 100%;
    padding: 0 4rem;
}

.half { width: 50%; }
.wide { width: 60%; }
.narrow { width: 40%; }
.copy-block.wide { width: auto; max-width: 42rem; }

.copy h2, .copy h3, .contact h2 {
    font-family: var(--serif);
    font-weight: 400;
    font-size: 3.75rem;
    margin: 0 0 2rem;
}

.copy h3 {
    margin-bottom: 1rem;
}

.copy-body p {
    font-size: 1.125rem;
    line-height: 1.7;
    color: var(--muted);
    margin: 0 0 1.5rem;
}

.project-kind {
    font-size: 1.25rem;
    margin-bottom: 1rem;
}

.project-location {
    color: var(--muted);
    margin-bottom: 0.5rem;
}

.project-meta {
    font-size: 0.875rem;
    color: var(--muted);
}

.contact {
    justify-content: center;
}

.contact-block {
    text-align: center;
    max-width: 56rem;
    padding: 0 1.5rem;
}

.contact-lead {
    font-size: 1.25rem;
    color: var(--muted);
    margin-bottom: 2rem;
}

.contact-link {
    position: relative;
    display: inline-block;
    font-size: 1.5rem;
    color: inherit;
    text-decoration: none;
    transition: color 0.3s ease;
}

.contact-link::after {
    content: '';
    position: absolute;
    left: 0;
    bottom: 0;
    width: 100%;
    height: 1px;
    background: currentColor;
    transform: scaleX(0);
    transition: transform 0.3s ease;
}

.contact-link:hover {
    color: var(--muted);
}

.contact-link:hover::after {
    transform: scaleX(1);
}

.contact-footer {
    margin-top: 4rem;
    padding-top: 2rem;
    border-top: 1px solid var(--border);
    font-size: 0.875rem;
    color: var(--muted);
}

@keyframes heroIntro {
    from { opacity: 0; transform: scale(0.9); }
    to { opacity: 1; transform: scale(1); }
}

@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.4; }
}

@media (max-width: 768px) {
    .hero h1 { font-size: 3rem; }
    .hero-monogram { width: 12rem; height: 12rem; }
    .copy { padding: 0 2rem; }
    .copy h2, .copy h3, .contact h2 { font-size: 2.25rem; }
}
"#;

/// Browser hooks of a mounted stage. Dropping it detaches everything.
struct StageBinding {
    window: Window,
    frames: FrameLoop,
    on_scroll: Closure<dyn FnMut()>,
    on_resize: Closure<dyn FnMut()>,
    observer: Option<ResizeObserver>,
    _on_observe: Closure<dyn FnMut()>,
}

impl StageBinding {
    fn attach(
        spacer: NodeRef,
        track: NodeRef,
        layout: UseStateSetter<StageLayout>,
        frame: UseStateSetter<MotionFrame>,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let metrics = ScrollMetrics::new(track.clone());
        let tracker = ProgressTracker::new(spacer);
        let driver = Rc::new(RefCell::new(StageDriver::new(config::TRACK_SPRING)));

        // One frame at most per repaint, however many events arrived.
        let frames = {
            let driver = driver.clone();
            FrameLoop::new(move |now| {
                let travel = driver.borrow().layout().travel;
                let progress = tracker.update(travel);
                let outcome = driver.borrow_mut().advance(now, progress);
                if let Some(next) = outcome.frame {
                    frame.set(next);
                }
                outcome.needs_frame
            })?
        };

        let remeasure = {
            let frames = frames.clone();
            Rc::new(move || {
                let measured = metrics.measure();
                let changed = driver.borrow_mut().relayout(measured);
                if let Some(next) = changed {
                    debug!(
                        "Stage relayout: travel {}px, spacer {}px",
                        next.travel.get(),
                        next.spacer_height()
                    );
                    layout.set(next);
                    frames.request();
                }
            })
        };

        let on_resize = {
            let remeasure = remeasure.clone();
            Closure::wrap(Box::new(move || remeasure()) as Box<dyn FnMut()>)
        };
        let on_observe = {
            let remeasure = remeasure.clone();
            Closure::wrap(Box::new(move || remeasure()) as Box<dyn FnMut()>)
        };
        let on_scroll = {
            let frames = frames.clone();
            Closure::wrap(Box::new(move || frames.request()) as Box<dyn FnMut()>)
        };

        for (event, callback) in [("scroll", &on_scroll), ("resize", &on_resize)] {
            if let Err(err) =
                window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                warn!("Could not listen for {}: {:?}", event, err);
            }
        }

        // Image and font loads widen the track without a window resize.
        let observer = match (
            ResizeObserver::new(on_observe.as_ref().unchecked_ref()),
            track.cast::<Element>(),
        ) {
            (Ok(observer), Some(element)) => {
                observer.observe(&element);
                Some(observer)
            }
            (Err(err), _) => {
                warn!("ResizeObserver unavailable: {:?}", err);
                None
            }
            (Ok(observer), None) => {
                observer.disconnect();
                None
            }
        };

        remeasure();
        frames.request();

        Some(Self {
            window,
            frames,
            on_scroll,
            on_resize,
            observer,
            _on_observe: on_observe,
        })
    }
}

impl Drop for StageBinding {
    fn drop(&mut self) {
        for (event, callback) in [("scroll", &self.on_scroll), ("resize", &self.on_resize)] {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.frames.cancel();
    }
}

#[function_component(ScrollStage)]
pub fn scroll_stage() -> Html {
    let spacer_ref = use_node_ref();
    let track_ref = use_node_ref();
    let layout = use_state(StageLayout::default);
    let frame = use_state(MotionFrame::default);
    let motion = use_memo(|_| table::motion_spec(), ());

    {
        let spacer_ref = spacer_ref.clone();
        let track_ref = track_ref.clone();
        let layout = layout.setter();
        let frame = frame.setter();
        use_effect_with_deps(
            move |_| {
                info!("Mounting scroll stage");
                let binding = StageBinding::attach(spacer_ref, track_ref, layout, frame);
                if binding.is_none() {
                    warn!("No browser window, scroll stage stays static");
                }
                move || {
                    drop(binding);
                    info!("Scroll stage unmounted");
                }
            },
            (),
        );
    }

    let progress = frame.progress;
    let style_of = |element: ElementId| -> String {
        MotionMapper::style_for(progress, motion.curves(element)).to_css()
    };

    html! {
        <>
            <div class="scroll-progress" style={format!("transform: scaleX({});", progress)}></div>

            <div ref={spacer_ref} class="scroll-spacer" style={format!("height: {}px;", layout.spacer_height())}></div>

            <div class="stage-frame">
                <div
                    ref={track_ref}
                    class="stage-track"
                    style={format!("transform: translate3d({}px, 0, 0);", frame.track_x)}
                >
                    <Hero hint_style={style_of(ElementId::ScrollHint)} />
                    <About
                        image_style={style_of(ElementId::AboutImage)}
                        text_style={style_of(ElementId::AboutText)}
                    />
                    {
                        for PROJECTS.iter().map(|project| html! {
                            <ProjectShowcase
                                key={project.title}
                                project={project}
                                image_style={style_of(project.image_element)}
                                text_style={style_of(project.text_element)}
                            />
                        })
                    }
                    <Contact style={style_of(ElementId::ContactBlock)} />
                </div>
            </div>

            <style>{STAGE_CSS}</style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule<'a>(css: &'a str, selector: &str) -> &'a str {
        let open = css
            .find(&format!("{} {{", selector))
            .unwrap_or_else(|| panic!("no rule for {}", selector));
        let body = &css[open..];
        &body[..body.find('}').unwrap()]
    }

    #[test]
    fn test_track_box_grows_with_its_sections() {
        let track = rule(STAGE_CSS, ".stage-track");
        assert!(track.contains("width: max-content;"), "{}", track);
        assert!(!track.contains("100vw"));
    }

    #[test]
    fn test_sections_do_not_shrink_into_the_track() {
        let section = rule(STAGE_CSS, ".stage-section");
        assert!(section.contains("flex-shrink: 0;"));
        assert!(section.contains("min-width: 100vw;"));
    }
}
