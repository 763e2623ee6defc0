//! Plotting observer for visualizing trajectories.
//!
//! See [`PlotObserver`] for usage.

use eframe::egui;
use egui_plot::{HLine, Legend, Line, Plot, PlotPoints};
use kinetic_core::Observer;

use crate::traits::HasState;

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(
///     ShowConfig::new()
///         .title("Mass-spring-damper")
///         .note(case.case_label())
///         .note(case.form_label())
///         .legend(),
/// )?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    notes: Vec<String>,
    legend: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with no title, no notes, and no legend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Adds a line of text shown above the plot.
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }
}

/// An observer that collects `(t, y)` traces and displays them via egui.
///
/// The const generic `N` is the number of traces. Used directly as a solver
/// observer, trace `i` records state component `i + 1` against time, so a
/// `PlotObserver<2>` on a `[t, x, v]` system plots displacement and velocity.
/// Traces can also be filled by hand with [`record`](PlotObserver::record)
/// or [`extend`](PlotObserver::extend), for example to overlay an exact
/// solution on a numerical one.
///
/// Horizontal reference lines, such as a steady state, are added with
/// [`reference`](PlotObserver::reference).
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["RK4", "Exact"]);
/// rk4::solve(&engine, &model, model.state().clone(), steps, |event: &rk4::Event| {
///     obs.record(event.state.time(), [Some(event.state[1]), None]);
///     None
/// })?;
/// obs.extend(1, exact_samples);
/// obs.reference("Steady state", model.steady_state());
/// obs.show(ShowConfig::new().title("Mass-spring-damper").legend())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
    references: Vec<(String, f64)>,
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
            references: Vec::new(),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, t: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([t, y]);
            }
        }
    }

    /// Appends `(t, y)` samples to a single trace.
    ///
    /// # Panics
    ///
    /// Panics if `trace >= N`.
    pub fn extend(&mut self, trace: usize, samples: impl IntoIterator<Item = (f64, f64)>) {
        self.data[trace].extend(samples.into_iter().map(|(t, y)| [t, y]));
    }

    /// Adds a named horizontal reference line at `y`.
    pub fn reference(&mut self, name: &str, y: f64) {
        self.references.push((name.to_owned(), y));
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();
        let references = self.references;
        let notes = config.notes;
        let legend = config.legend;

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    references,
                    notes,
                    legend,
                }))
            }),
        )
    }
}

impl<const N: usize, E: HasState, A> Observer<E, A> for PlotObserver<N> {
    fn observe(&mut self, event: &E) -> Option<A> {
        let traces = std::array::from_fn(|i| event.component(i + 1));
        self.record(event.time(), traces);
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the solve completes.
impl<const N: usize, E: HasState, A> Observer<E, A> for &mut PlotObserver<N> {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    references: Vec<(String, f64)>,
    notes: Vec<String>,
    legend: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            for note in &self.notes {
                ui.label(note);
            }

            let mut plot = Plot::new("plot_observer");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(plot_points).name(name));
                }
                for (name, y) in &self.references {
                    plot_ui.hline(HLine::new(*y).name(name));
                }
            });
        });
    }
}
