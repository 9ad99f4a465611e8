use crate::canvas::{self, CanvasRenderer};
use crate::host::WebHost;
use crate::settings::Settings;
use crate::timer::TickTimer;
use crate::utils::*;
use clap::Args;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::window;
use snake_core as game;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Tick,
    Input(game::InputEvent),
    Steer { x: f64, y: f64 },
    ToggleMusic,
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Grid width in cells
    #[arg(long)]
    cols: Option<game::Coord>,

    /// Grid height in cells
    #[arg(long)]
    rows: Option<game::Coord>,
}

impl GameProps {
    fn game_config(&self) -> game::GameConfig {
        let default = game::GameConfig::DEFAULT;
        let grid = game::Grid::new(
            self.cols.unwrap_or(default.grid.cols),
            self.rows.unwrap_or(default.grid.rows),
        );
        game::GameConfig::new(grid, default.initial_length)
    }
}

#[derive(Properties, Clone, PartialEq)]
struct PadProps {
    callback: Callback<game::InputEvent>,
}

/// On-screen arrows for pointer and touch players.
#[function_component(DirectionPad)]
fn direction_pad(props: &PadProps) -> Html {
    use game::InputEvent::*;

    let button = |event: game::InputEvent, label: &'static str, class: &'static str| {
        let callback = props.callback.clone();
        let onclick = Callback::from(move |_: MouseEvent| callback.emit(event));
        html! {
            <button {class} aria-label={format!("{:?}", event)} {onclick}>{label}</button>
        }
    };

    html! {
        <div class="pad">
            {button(Up, "▲", "up")}
            {button(Left, "◀", "left")}
            {button(Down, "▼", "down")}
            {button(Right, "▶", "right")}
        </div>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    controller: game::GameController<WebHost>,
    settings: Settings,
    _keydown: EventListener,
}

impl GameView {
    fn create_keydown_listener(ctx: &Context<Self>) -> EventListener {
        let link = ctx.link().clone();
        let options = EventListenerOptions::enable_prevent_default();
        EventListener::new_with_options(&window(), "keydown", options, move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let modified = event.ctrl_key() || event.meta_key() || event.alt_key();
            let input = game::InputEvent::from_keypress(&event.key(), &event.code(), modified);
            if let Some(input) = input {
                // keep arrows and space from scrolling the page
                event.prevent_default();
                link.send_message(Msg::Input(input));
            }
        })
    }

    fn get_game_state_class(&self) -> Classes {
        use game::RunState::*;
        classes!(match self.controller.engine().run_state() {
            Idle => "not-started",
            Running => "in-progress",
            Paused => "paused",
            GameOver => "lose",
        })
    }

    /// Music is only allowed to start from a user gesture, so a remembered preference waits for
    /// the first input.
    fn resume_music_preference(&mut self) {
        if self.settings.music {
            self.controller.host_mut().audio().start_music();
        }
    }

    fn view_game_over(&self, ctx: &Context<Self>) -> Html {
        let state = self.controller.state();
        if !state.run_state().is_finished() {
            return html! {};
        }

        let headline = match state.game_over_reason() {
            Some(game::GameOverReason::BoardFull) => "Board full!",
            _ => "Game over",
        };
        let cb_play_again = ctx
            .link()
            .callback(|_| Msg::Input(game::InputEvent::Start));

        html! {
            <dialog open={true}>
                <article>
                    <h2>{headline}</h2>
                    <p>{format!("Score: {}", state.score())}</p>
                    <p><small>{"Press space or Start for one more chance!"}</small></p>
                    <footer>
                        <button onclick={cb_play_again}>{"Play again"}</button>
                    </footer>
                </article>
            </dialog>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let config = props.game_config();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}, grid: {:?}", seed, config.grid);

        let timer = TickTimer::new(ctx.link().callback(|()| Msg::Tick));
        let host = WebHost::new(CanvasRenderer::new(config.grid), timer);

        Self {
            controller: game::GameController::new(config, game::RandomFoodPlacer::new(seed), host),
            settings: LocalOrDefault::local_or_default(),
            _keydown: GameView::create_keydown_listener(ctx),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Tick => self.controller.tick().has_update(),
            Input(input) => {
                log::trace!("input: {:?}", input);
                self.resume_music_preference();
                self.controller.handle_input(input);
                true
            }
            Steer { x, y } => {
                let head = self.controller.state().snake().head();
                let (dx, dy) = canvas::pointer_delta(head, x, y);
                log::trace!("steer towards ({}, {})", dx, dy);
                self.controller.steer_toward(dx, dy);
                false
            }
            ToggleMusic => {
                self.settings = self.settings.with_music_toggled();
                self.controller.host_mut().audio().set_music(self.settings.music);
                self.settings.local_save();
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            // the canvas only exists from here on
            self.controller.redraw();
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.controller.host_mut().shutdown();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use game::InputEvent::*;

        let state = self.controller.state();
        let (width, height) = canvas::canvas_size(self.controller.engine().config().grid);
        let is_running = state.run_state().is_running();
        let music_on = self.settings.music;

        let cb_start = ctx.link().callback(|_| Msg::Input(Start));
        let cb_pause = ctx.link().callback(|_| Msg::Input(TogglePause));
        let cb_music = ctx.link().callback(|_| Msg::ToggleMusic);
        let cb_pad = ctx.link().callback(Msg::Input);
        let cb_steer = ctx.link().callback(|e: MouseEvent| Msg::Steer {
            x: f64::from(e.offset_x()),
            y: f64::from(e.offset_y()),
        });

        html! {
            <div class={classes!("snake", self.get_game_state_class())}>
                <nav>
                    <aside>{"Score "}<strong>{state.score().to_string()}</strong></aside>
                    <aside>{"Best "}<strong>{state.high_score().to_string()}</strong></aside>
                </nav>
                <canvas
                    ref={self.controller.host().canvas_ref()}
                    width={width.to_string()}
                    height={height.to_string()}
                    tabindex="0"
                    onmousedown={cb_steer}
                />
                {self.view_game_over(ctx)}
                <footer>
                    <button onclick={cb_start}>{"Start"}</button>
                    <button onclick={cb_pause}>
                        {if is_running { "Pause" } else { "Resume" }}
                    </button>
                    <button
                        class={classes!(music_on.then_some("active"))}
                        aria-pressed={music_on.to_string()}
                        onclick={cb_music}
                    >
                        {if music_on { "♪ on" } else { "♪" }}
                    </button>
                </footer>
                <DirectionPad callback={cb_pad}/>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct HashArgs {
        #[command(flatten)]
        game: GameProps,
    }

    fn parse(hash: &str) -> GameProps {
        HashArgs::try_parse_from(hash.split(['#', '&'])).unwrap().game
    }

    #[test]
    fn empty_hash_uses_default_config() {
        let props = parse("");

        assert_eq!(props.seed, None);
        assert_eq!(props.game_config(), game::GameConfig::DEFAULT);
    }

    #[test]
    fn hash_overrides_seed_and_grid() {
        let props = parse("#--seed=42&--cols=40&--rows=25");

        assert_eq!(props.seed, Some(42));
        assert_eq!(props.game_config().grid, game::Grid::new(40, 25));
    }

    #[test]
    fn tiny_grids_are_grown_to_fit_the_snake() {
        let props = parse("#--cols=1&--rows=1");

        assert_eq!(props.game_config().grid, game::Grid::new(4, 1));
    }
}
