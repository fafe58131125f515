use modalkit::client::App;

fn main() {
    dioxus::launch(App);
}
