fn main() {
    shipping_info_app::start();
}
