fn main() {
    taskmenu::run();
}
