use mosaic_ui::DispatchError;

fn main() -> Result<(), DispatchError> {
    mosaic_ui::init_tracing_with_default("error,mosaic_ui=info,example=info");
    example::run()
}
