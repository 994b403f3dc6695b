use std::rc::Rc;

use parlay_slip::config::{parse_stake, DEFAULT_DATA_URL, DEFAULT_STAKE};
use parlay_slip::display;
use parlay_slip::{
    console, loader, Eligibility, LockPolicy, ParlayResult, RowTable, SelectOutcome,
    SelectionEngine, SlipConfig,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew::TargetCast;

enum SlipAction {
    Loaded(Rc<RowTable>),
    Toggle(String),
    Calculate,
    Reset,
    SetStake(String),
    SetPolicy(LockPolicy),
}

#[derive(Clone)]
struct SlipState {
    engine: SelectionEngine,
    loaded: bool,
    notice: Option<String>,
    result: Option<ParlayResult>,
}

impl Default for SlipState {
    fn default() -> Self {
        Self {
            engine: SelectionEngine::unloaded(SlipConfig::default()),
            loaded: false,
            notice: None,
            result: None,
        }
    }
}

impl Reducible for SlipState {
    type Action = SlipAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SlipAction::Loaded(table) => {
                next.engine.replace_table(table);
                next.loaded = true;
            }
            SlipAction::Toggle(team_id) => {
                console::info(&format!("Team {team_id} button clicked"));
                match next.engine.toggle(&team_id) {
                    Ok(outcome) => {
                        // the picks changed, so a shown result is stale
                        next.result = None;
                        next.notice = match outcome {
                            Some(SelectOutcome::ReadyToCalculate) => {
                                Some("All picks made. Press Calculate.".to_string())
                            }
                            _ => None,
                        };
                    }
                    Err(e) => next.notice = Some(e.to_string()),
                }
            }
            SlipAction::Calculate => match next.engine.calculate() {
                Ok(result) => {
                    console::info(&format!(
                        "Implied Probability: {:.1}% Book Probability: {:.1}%",
                        result.implied_probability_pct, result.book_probability_pct
                    ));
                    next.result = Some(result);
                    next.notice = None;
                }
                Err(e) => {
                    next.result = None;
                    next.notice = Some(e.to_string());
                }
            },
            SlipAction::Reset => {
                next.engine.reset();
                next.result = None;
                next.notice = None;
            }
            SlipAction::SetStake(text) => match parse_stake(&text) {
                Some(stake) => {
                    next.engine.set_stake(stake);
                    next.result = None;
                    next.notice = None;
                }
                None => {
                    next.result = None;
                    next.notice = Some(format!("Enter a valid stake amount (got {:?}).", text));
                }
            },
            SlipAction::SetPolicy(policy) => next.engine.set_lock_policy(policy),
        }
        Rc::new(next)
    }
}

#[function_component(App)]
fn app() -> Html {
    let slip = use_reducer(SlipState::default);
    let stake_text = use_state(|| format!("{}", DEFAULT_STAKE));

    // Load once; the board renders with placeholders until this lands.
    {
        let slip = slip.clone();
        use_effect_with((), move |_| {
            yew::platform::spawn_local(async move {
                let table = loader::fetch_table_or_empty(DEFAULT_DATA_URL).await;
                slip.dispatch(SlipAction::Loaded(Rc::new(table)));
            });
            || ()
        });
    }

    let engine = &slip.engine;
    let config = engine.config();
    let labels = display::team_labels(&config.topology, engine.table());
    let details = engine.pick_details();

    // Handlers
    let on_calculate = {
        let slip = slip.clone();
        Callback::from(move |_| slip.dispatch(SlipAction::Calculate))
    };
    let on_reset = {
        let slip = slip.clone();
        Callback::from(move |_| slip.dispatch(SlipAction::Reset))
    };
    let on_stake_input = {
        let slip = slip.clone();
        let stake_text = stake_text.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            stake_text.set(target.value());
            slip.dispatch(SlipAction::SetStake(target.value()));
        })
    };
    let on_policy_change = {
        let slip = slip.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let policy = match target.selected_index() {
                1 => LockPolicy::AllowSwap,
                _ => LockPolicy::LockOnComplete,
            };
            slip.dispatch(SlipAction::SetPolicy(policy));
        })
    };

    let picks_status = format!("{} / {} picks", engine.len(), config.max_selections);
    let ready = engine.is_ready();

    html! {
        <div class="container">
            <header>
                <h1>{"Parlay Slip"}</h1>
                <div class="pill">{picks_status}</div>
            </header>

            { if !slip.loaded {
                html!{ <div class="hint">{"Loading odds…"}</div> }
            } else if engine.table().is_empty() {
                html!{ <div class="status-indicator warning">{"Odds unavailable. Showing team ids only."}</div> }
            } else { html!{} }}

            { if let Some(msg) = &slip.notice {
                html!{ <div class="notice">{msg.clone()}</div> }
            } else { html!{} }}

            <div class="grid">
                { for config.topology.games().map(|game| {
                    html!{
                        <div class="card game">
                            <h2>{format!("Game {}", game)}</h2>
                            <div class="row">
                                { for labels.iter().filter(|l| l.game == game).map(|label| {
                                    let eligibility = engine.eligibility_of(&label.team_id).unwrap_or(Eligibility::Locked);
                                    let team_id = label.team_id.clone();
                                    let slip = slip.clone();
                                    let onclick = Callback::from(move |_| {
                                        slip.dispatch(SlipAction::Toggle(team_id.clone()));
                                    });
                                    html!{
                                        <button
                                            id={label.team_id.clone()}
                                            class={classes!("team", eligibility.css_class())}
                                            disabled={!eligibility.is_clickable()}
                                            onclick={onclick}>
                                            <span class="team-name">{&label.name}</span>
                                            <span class="moneyline">{&label.moneyline}</span>
                                        </button>
                                    }
                                })}
                            </div>
                        </div>
                    }
                })}
            </div>

            { if !details.is_empty() {
                html!{
                    <div class="card">
                        <h2>{"Your Picks"}</h2>
                        { for details.iter().map(|d| html!{
                            <details open={true}>
                                <summary>{&d.heading}</summary>
                                { for d.lines.iter().map(|line| html!{ <div class="hint">{line}</div> }) }
                            </details>
                        })}
                    </div>
                }
            } else { html!{} }}

            <div class="card">
                <div class="row" style="align-items:end;">
                    <div class="input-group">
                        <label>{"Stake ($)"}</label>
                        <input
                            type="text"
                            value={(*stake_text).clone()}
                            oninput={on_stake_input}
                            aria-label="Stake amount" />
                    </div>
                    <div class="input-group">
                        <label>{"When the slip is full"}</label>
                        <select onchange={on_policy_change} aria-label="Lock policy">
                            { for LockPolicy::all().iter().map(|(p, name)| {
                                let selected = *p == config.lock_policy;
                                html!{ <option selected={selected}>{ *name }</option> }
                            })}
                        </select>
                    </div>
                </div>
                <div class="row">
                    <button id="calculate-button" class={if ready { "success" } else { "" }} onclick={on_calculate}>
                        {"Calculate"}
                    </button>
                    <button id="reset-button" class="danger" onclick={on_reset}>{"Reset"}</button>
                </div>
            </div>

            <div id="results" class="card">
                <h3>{"Results"}</h3>
                { if let Some(result) = &slip.result {
                    let (legs, summary) = display::result_lines(result);
                    html!{
                        <>
                            <p>{"The probability of you winning for each game:"}</p>
                            <ul>
                                { for legs.iter().map(|l| html!{ <li>{l}</li> }) }
                            </ul>
                            <p>{summary}</p>
                        </>
                    }
                } else { html!{} }}
            </div>

            <footer>
                {"Parlay Slip v0.1 - legs are treated as independent events"}
            </footer>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
