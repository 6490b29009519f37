pub mod config;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use crate::pages::wheel::PrizeWheel;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="min-h-screen w-full">
            <div class="mx-auto">
                <PrizeWheel />
            </div>
        </div>
    }
}
