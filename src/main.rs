use scatter_sim::app;

fn main() {
    app::run();
}
