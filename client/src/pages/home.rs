//! Home page: the two-column box grid.
//!
//! ARCHITECTURE
//! ============
//! A narrow left column stacks boxes 1-3; the alert and appointment
//! accordions live under the captions of boxes 1 and 2. The wide right
//! column holds box 4 (wrapping box 5) above a row of boxes 6 and 7.

use leptos::prelude::*;

use crate::components::accordion::{AlertsAccordion, AppointmentsAccordion};
use crate::components::layout_box::{Basis, LayoutBox, basis_class};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <div class="home-page__grid">
                <div class="home-page__column home-page__column--narrow">
                    <div class="home-page__stack">
                        <LayoutBox caption="1" basis=Basis::TwoThirds>
                            <AlertsAccordion/>
                        </LayoutBox>
                        <LayoutBox caption="2" basis=Basis::TwoThirds>
                            <AppointmentsAccordion/>
                        </LayoutBox>
                        <LayoutBox caption="3" basis=Basis::Full/>
                    </div>
                </div>
                <div class="home-page__column home-page__column--wide">
                    <div class="home-page__stack">
                        <LayoutBox caption="4" basis=Basis::ThreeSevenths>
                            <LayoutBox caption="5"/>
                        </LayoutBox>
                        <div class=format!("home-page__row {}", basis_class(Basis::FourSevenths))>
                            <LayoutBox caption="6" basis=Basis::OneThird/>
                            <LayoutBox caption="7" basis=Basis::TwoThirds/>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
