// src/progress.rs
/// Progress reporting for the scrape loop.
/// The CLI prints lines; tests record calls or pass `NullProgress`.
pub trait Progress {
    /// Called once the NPC list is known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One NPC page was read. `chars` is that NPC's character total,
    /// `running_total` the sum over the run so far.
    fn item_done(&mut self, _entity: &str, _chars: usize, _running_total: usize) {}

    /// One NPC yielded no dialogue (request failed or no table).
    fn item_failed(&mut self, _entity: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints one line per NPC to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    done: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, entity: &str, chars: usize, running_total: usize) {
        self.done += 1;
        println!("Total characters in '{entity}': {chars} (total {running_total})");
    }
    fn item_failed(&mut self, entity: &str) {
        self.done += 1;
        println!("No dialogue for '{entity}' ({}/{})", self.done, self.total);
    }
    fn finish(&mut self) {
        logd!("progress finished at {}/{}", self.done, self.total);
    }
}
