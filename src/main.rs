fn main() {
    slingshot::game::run();
}
