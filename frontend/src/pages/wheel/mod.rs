mod wheel_canvas;
mod wheel_utils;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use log::{debug, error, info};
use prize_wheel::constants::CANVAS_DIAMETER;
use prize_wheel::{Prize, SpinAdmission, Wheel};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use yew::prelude::*;

use crate::config::{load_prizes, load_wheel_config};
use crate::styles;

pub use wheel_canvas::CanvasSurface;
pub use wheel_utils::{random_prize_id, ResultDisplay, SpinButton};

type SharedWheel = Rc<RefCell<Option<Wheel<CanvasSurface>>>>;

/// What the page shows around the canvas. The wheel itself lives outside
/// yew state and is driven by the frame loop.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WheelPageState {
    pub prizes: Vec<Prize>,
    pub won: Vec<bool>,
    pub is_spinning: bool,
    pub last_result: Option<(Prize, usize)>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WheelAction {
    Ready(Vec<Prize>),
    SpinStarted,
    SpinCompleted { prize: Prize, index: usize },
    Failed(String),
}

impl Reducible for WheelPageState {
    type Action = WheelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            WheelAction::Ready(prizes) => {
                next.won = vec![false; prizes.len()];
                next.prizes = prizes;
                next.is_spinning = false;
                next.last_result = None;
                next.error_message = None;
            }
            WheelAction::SpinStarted => {
                next.is_spinning = true;
                next.error_message = None;
            }
            WheelAction::SpinCompleted { prize, index } => {
                if let Some(won) = next.won.get_mut(index) {
                    *won = true;
                }
                next.is_spinning = false;
                next.last_result = Some((prize, index));
            }
            WheelAction::Failed(message) => {
                next.is_spinning = false;
                next.error_message = Some(message);
            }
        }
        Rc::new(next)
    }
}

// Ticks the wheel once per animation frame and repaints the canvas.
struct FrameLoop {
    wheel: SharedWheel,
    dispatcher: UseReducerDispatcher<WheelPageState>,
    handle: RefCell<Option<AnimationFrame>>,
    last_timestamp: Cell<Option<f64>>,
}

impl FrameLoop {
    fn new(wheel: SharedWheel, dispatcher: UseReducerDispatcher<WheelPageState>) -> Self {
        Self {
            wheel,
            dispatcher,
            handle: RefCell::new(None),
            last_timestamp: Cell::new(None),
        }
    }

    fn on_frame(&self, timestamp: f64) {
        // rAF timestamps are in milliseconds
        let dt = match self.last_timestamp.replace(Some(timestamp)) {
            Some(previous) => (timestamp - previous) / 1000.0,
            None => 0.0,
        };

        let outcome = {
            let mut slot = self.wheel.borrow_mut();
            match slot.as_mut() {
                Some(wheel) => {
                    let outcome = wheel.tick(dt);
                    wheel.surface_mut().paint();
                    outcome
                }
                None => None,
            }
        };

        if let Some(outcome) = outcome {
            self.dispatcher.dispatch(WheelAction::SpinCompleted {
                prize: outcome.prize,
                index: outcome.index,
            });
        }
    }

    fn stop(&self) {
        self.handle.borrow_mut().take();
    }
}

fn schedule_frame(frame_loop: Rc<FrameLoop>) {
    let next = frame_loop.clone();
    let handle = request_animation_frame(move |timestamp| {
        next.on_frame(timestamp);
        schedule_frame(next);
    });
    *frame_loop.handle.borrow_mut() = Some(handle);
}

#[function_component(PrizeWheel)]
pub fn prize_wheel() -> Html {
    let state = use_reducer(WheelPageState::default);
    let canvas_ref = use_node_ref();
    let wheel: SharedWheel = use_mut_ref(|| None);
    let rng = use_mut_ref(SmallRng::from_entropy);

    // Build the wheel once the canvas is mounted
    {
        let wheel = wheel.clone();
        let canvas_ref = canvas_ref.clone();
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let surface = CanvasSurface::new(canvas_ref);
            let built = Wheel::new(load_prizes(), load_wheel_config(), surface, |prize: &Prize, index| {
                info!("Wheel stopped on {} (sector {})", prize.id, index);
            });

            let frame_loop = match built {
                Ok(built) => {
                    let prizes = built.sectors().prizes().to_vec();
                    *wheel.borrow_mut() = Some(built);
                    dispatcher.dispatch(WheelAction::Ready(prizes));

                    let frame_loop = Rc::new(FrameLoop::new(wheel.clone(), dispatcher));
                    schedule_frame(frame_loop.clone());
                    Some(frame_loop)
                }
                Err(e) => {
                    error!("Failed to set up wheel: {}", e);
                    dispatcher.dispatch(WheelAction::Failed(e.to_string()));
                    None
                }
            };

            move || {
                if let Some(frame_loop) = frame_loop {
                    frame_loop.stop();
                }
                wheel.borrow_mut().take();
            }
        });
    }

    let request_spin = {
        let wheel = wheel.clone();
        let rng = rng.clone();
        let dispatcher = state.dispatcher();
        Rc::new(move || {
            let action = {
                let mut slot = wheel.borrow_mut();
                let wheel = match slot.as_mut() {
                    Some(wheel) => wheel,
                    None => return,
                };
                let prize_id = match random_prize_id(wheel.sectors().prizes(), &mut *rng.borrow_mut()) {
                    Some(id) => id,
                    None => return,
                };

                match wheel.spin(&prize_id) {
                    Ok(SpinAdmission::Started) => Some(WheelAction::SpinStarted),
                    Ok(SpinAdmission::Ignored) => {
                        debug!("Spin already in progress");
                        None
                    }
                    Err(e) => {
                        error!("Spin failed: {}", e);
                        Some(WheelAction::Failed(e.to_string()))
                    }
                }
            };

            if let Some(action) = action {
                dispatcher.dispatch(action);
            }
        })
    };

    let onclick = {
        let request_spin = request_spin.clone();
        Callback::from(move |_: MouseEvent| request_spin())
    };

    let ontouchstart = Callback::from(move |e: TouchEvent| {
        e.prevent_default();
        request_spin();
    });

    let canvas_size = CANVAS_DIAMETER.to_string();

    html! {
        <div class={styles::CONTAINER}>
            <div class="max-w-2xl mx-auto py-8">
                <h1 class={classes!(styles::TEXT_H1, "mb-6", "text-center")}>
                    <span class="bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500">{"Prize Wheel"}</span>
                </h1>

                <div class={styles::CARD}>
                    <div class="relative mx-auto mb-8 flex justify-center items-center">
                        <div class="w-full max-w-[500px] mx-auto aspect-square">
                            <canvas
                                ref={canvas_ref}
                                width={canvas_size.clone()}
                                height={canvas_size}
                                class="w-full h-full"
                            />
                        </div>
                        <div class="absolute inset-0 flex items-center justify-center">
                            <SpinButton
                                is_spinning={state.is_spinning}
                                onclick={onclick}
                                ontouchstart={ontouchstart}
                            />
                        </div>
                    </div>

                    if let Some(message) = &state.error_message {
                        <div class={classes!(styles::CARD_ERROR, "mb-6", "text-center")}>
                            {message.clone()}
                        </div>
                    }

                    <ResultDisplay
                        prizes={state.prizes.clone()}
                        won={state.won.clone()}
                        last_result={state.last_result.clone()}
                    />
                </div>
            </div>
        </div>
    }
}
