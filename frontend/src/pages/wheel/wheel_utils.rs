use prize_wheel::Prize;
use rand::seq::SliceRandom;
use rand::Rng;
use yew::prelude::*;

use crate::styles;

// Same odds for every prize, like the demo wheel's button handler.
pub fn random_prize_id<R: Rng + ?Sized>(prizes: &[Prize], rng: &mut R) -> Option<String> {
    prizes.choose(rng).map(|prize| prize.id.clone())
}

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub prizes: Vec<Prize>,
    /// Sectors won so far this session, by index.
    pub won: Vec<bool>,
    pub last_result: Option<(Prize, usize)>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let headline = match &props.last_result {
        Some((prize, _)) => html! {
            <div class={styles::CARD_SUCCESS}>
                {format!("You won {}!", prize.label())}
            </div>
        },
        None => html! {
            <p class={styles::TEXT_SMALL}>{"Press SPIN to try your luck."}</p>
        },
    };

    html! {
        <div class="mt-8 mb-4 flex flex-col items-center justify-center gap-4">
            {headline}
            <ul class="grid grid-cols-2 sm:grid-cols-4 gap-2 w-full">
                { for props.prizes.iter().enumerate().map(|(index, prize)| {
                    let is_won = props.won.get(index).copied().unwrap_or(false);
                    let class = if is_won {
                        "px-3 py-2 rounded-lg text-center font-bold text-white shadow-lg"
                    } else {
                        "px-3 py-2 rounded-lg text-center opacity-50 text-gray-900"
                    };
                    html! {
                        <li key={prize.id.clone()}
                            class={class}
                            style={format!("background-color: {};", prize.background)}>
                            {prize.label()}
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
    pub ontouchstart: Callback<TouchEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_class = if props.is_spinning {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 shadow-lg hover:shadow-xl cursor-pointer"
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            ontouchstart={props.ontouchstart.clone()}
            disabled={props.is_spinning}
            class={classes!(
                "w-24",
                "h-24",
                "rounded-full",
                "font-bold",
                "text-2xl",
                "text-[#7c4d1b]",
                "border-4",
                "border-white",
                "transition-all",
                "duration-300",
                button_class
            )}
        >
            {"SPIN"}
        </button>
    }
}
