//! Headless host loop
//!
//! Drives a swiper without a window: measures it, autoplays, presses the
//! "prev" button, pans, and prints the state after every step. Run with
//! `RUST_LOG=debug` to see the swiper's own logging.

use std::time::{Duration, Instant};

use astra_swiper::{
    text_node, GestureEvent, Layout, Node, Orientation, SpringConfig, Swiper, SwiperConfig,
    TextProps,
};
use astra_swiper_controls::{swiper_view, CellPosition, ControlsProps, SwiperStyles};

const FRAME: Duration = Duration::from_millis(16);

struct Host {
    swiper: Swiper<&'static str>,
    now: Instant,
}

impl Host {
    fn run_for(&mut self, duration: Duration) {
        let frames = (duration.as_millis() / FRAME.as_millis()).max(1);
        for _ in 0..frames {
            self.now += FRAME;
            self.swiper.tick(self.now, FRAME);
        }
    }

    fn render(&self) -> Node {
        let props = ControlsProps::default()
            .with_dots_touchable(true)
            .with_first_prev_element("·")
            .with_cell_content(CellPosition::Top, "Fruit");
        swiper_view(&self.swiper, &SwiperStyles::default(), &props, |_, name| {
            text_node(&TextProps::new(*name))
        })
    }

    fn report(&self, step: &str) {
        let view = self.render();
        let actions = view.actions();
        println!(
            "{step:<24} index {} translation {:>8.1} actions {:?}",
            self.swiper.active_index(),
            self.swiper.translation().x,
            actions
        );
    }
}

fn main() {
    env_logger::init();

    let config = SwiperConfig::default()
        .with_timeout(1.5)
        .with_spring(SpringConfig::stiff());
    let mut swiper = Swiper::new(config, ["apple", "banana", "cherry", "damson"])
        .on_index_changed(|index| log::info!("index changed to {index}"))
        .on_animation_end(|index| log::info!("settled on {index}"));

    let now = Instant::now();
    swiper.on_mount(now);
    swiper.on_measure(Layout::sized(320.0, 240.0));

    let mut host = Host { swiper, now };
    host.report("mounted");

    host.run_for(Duration::from_secs(2));
    host.report("after autoplay");

    let prev = host.render().find("prev").and_then(Node::action);
    if let Some(action) = prev {
        host.swiper.dispatch(action);
    }
    host.run_for(Duration::from_secs(1));
    host.report("after pressing prev");

    let pan = GestureEvent::pan(Orientation::Horizontal, &[-20.0, -90.0, -140.0]);
    host.swiper.handle_gestures(pan);
    host.run_for(Duration::from_secs(1));
    host.report("after panning left");

    host.swiper.on_unmount();
    host.run_for(Duration::from_secs(5));
    host.report("after unmount");
}
