use tutor::lesson;

#[tutor::main]
async fn main() {
    lesson::run().await
}
