use bandbender::app::run;

fn main() -> color_eyre::Result<()> {
    run::<f64>()
}
