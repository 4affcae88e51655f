use anyhow::Result;
use widgetry::tools::FutureLoader;
use widgetry::{EventCtx, State, Transition};

// TODO Lift to widgetry::tools
pub struct FileLoader;

impl FileLoader {
    /// Asks the user to pick a JSON file. `on_load` gets None if they cancel.
    pub fn new_json_state<A: 'static>(
        ctx: &mut EventCtx,
        on_load: Box<dyn FnOnce(&mut EventCtx, &mut A, Result<Option<Vec<u8>>>) -> Transition<A>>,
    ) -> Box<dyn State<A>> {
        let (_, outer_progress_rx) = futures_channel::mpsc::channel(1);
        let (_, inner_progress_rx) = futures_channel::mpsc::channel(1);
        FutureLoader::<A, Option<Vec<u8>>>::new_state(
            ctx,
            Box::pin(async move {
                let builder = rfd::AsyncFileDialog::new().add_filter("JSON", &["json"]);
                let result = match builder.pick_file().await {
                    Some(file) => Some(file.read().await),
                    None => None,
                };
                let wrap: Box<dyn Send + FnOnce(&A) -> Option<Vec<u8>>> =
                    Box::new(move |_: &A| result);
                Ok(wrap)
            }),
            outer_progress_rx,
            inner_progress_rx,
            "Waiting for a route file to be chosen",
            on_load,
        )
    }
}
