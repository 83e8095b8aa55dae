//! Observer trait for progress reporting.
//!
//! Presentation (console printing, timing, logging) is the caller's concern;
//! the optimizer only raises callbacks at generation boundaries.

use crate::Tour;

/// Callbacks invoked by [`Colony::run`][crate::Colony::run] at key points in
/// the generation loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl ColonyObserver for ProgressPrinter {
///     fn on_new_best(&mut self, _iteration: u32, best: &Tour) {
///         println!("new best = {:.2} km", best.length_km);
///     }
/// }
/// ```
pub trait ColonyObserver {
    /// Called at the start of each iteration, before any ants run.
    fn on_iteration_start(&mut self, _iteration: u32) {}

    /// Called when a generation's best tour strictly improves on the best
    /// seen so far, before the pheromone update.
    fn on_new_best(&mut self, _iteration: u32, _best: &Tour) {}

    /// Called at the end of each iteration, after the pheromone update.
    ///
    /// `generation` is the full generation sorted ascending by length.
    fn on_iteration_end(&mut self, _iteration: u32, _generation: &[Tour]) {}

    /// Called once after the final iteration completes.
    fn on_run_end(&mut self, _best: &Tour) {}
}

/// A [`ColonyObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl ColonyObserver for NoopObserver {}
