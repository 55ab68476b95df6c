//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::puzzle::PuzzleId;
use std::collections::BTreeMap;

/// Factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>>;

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The puzzle the factory answers
    pub puzzle: PuzzleId,
    /// Number of parts this solver supports
    pub parts: u8,
}

/// Factory entry with metadata
struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for constructing a SolverRegistry with fluent API
///
/// The registry is immutable after construction. Duplicate and out-of-calendar
/// puzzle ids are rejected while registering.
///
/// # Example
///
/// ```
/// use advent_solver::{
///     ParseError, PuzzleId, PuzzleParser, SolveError, Solver, SolverInstance,
///     SolverRegistryBuilder,
/// };
///
/// struct Sum;
///
/// impl PuzzleParser for Sum {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Sum {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<u32>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let puzzle = PuzzleId::aoc(2022, 1);
/// let registry = SolverRegistryBuilder::new()
///     .register(puzzle, 1, move |input: &str| {
///         Ok(Box::new(SolverInstance::<Sum>::new(puzzle, input)?))
///     })
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(puzzle, "1\n2\n3").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "6");
/// ```
pub struct SolverRegistryBuilder {
    solvers: BTreeMap<PuzzleId, SolverFactoryEntry>,
}

impl SolverRegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            solvers: BTreeMap::new(),
        }
    }

    /// Register a solver factory function for a puzzle
    ///
    /// # Arguments
    /// * `puzzle` - The puzzle the factory answers
    /// * `parts` - Number of parts the solver supports
    /// * `factory` - A function that takes input and returns a boxed DynSolver
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - Duplicate or invalid puzzle id
    pub fn register<F>(
        mut self,
        puzzle: PuzzleId,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + 'static,
    {
        if !puzzle.is_valid() {
            return Err(RegistrationError::InvalidPuzzle(puzzle));
        }
        if self.solvers.contains_key(&puzzle) {
            return Err(RegistrationError::DuplicateSolver(puzzle));
        }
        self.solvers.insert(
            puzzle,
            SolverFactoryEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!` and
    /// registers each one with the builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use advent_solver::SolverRegistryBuilder;
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_all_plugins()
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use advent_solver::{Event, SolverRegistryBuilder};
    /// // Register only Infi solvers tagged as "walker"
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| {
    ///         plugin.puzzle.event == Event::Infi && plugin.tags.contains(&"walker")
    ///     })
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.puzzle)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
///
/// Iteration order is puzzle order (event, year, day).
pub struct SolverRegistry {
    solvers: BTreeMap<PuzzleId, SolverFactoryEntry>,
}

impl SolverRegistry {
    /// Create a solver instance for a puzzle, parsing `input`
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError)` - Solver not found or parsing failed
    pub fn create_solver<'a>(
        &self,
        puzzle: PuzzleId,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        if !puzzle.is_valid() {
            return Err(SolverError::InvalidPuzzle(puzzle));
        }
        let entry = self
            .solvers
            .get(&puzzle)
            .ok_or(SolverError::NotFound(puzzle))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Iterate over metadata for all registered factories
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.solvers.iter().map(|(puzzle, entry)| FactoryInfo {
            puzzle: *puzzle,
            parts: entry.parts,
        })
    }

    /// Get metadata for a specific factory
    pub fn get_info(&self, puzzle: PuzzleId) -> Option<FactoryInfo> {
        self.solvers.get(&puzzle).map(|entry| FactoryInfo {
            puzzle,
            parts: entry.parts,
        })
    }

    /// Check if a factory exists for the puzzle
    pub fn contains(&self, puzzle: PuzzleId) -> bool {
        self.solvers.contains_key(&puzzle)
    }

    /// Get the number of registered factories
    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// Unlike [`Solver`](crate::Solver), this trait has no associated types, so
/// different solver types can sit behind one `&'static dyn RegisterableSolver`.
/// Every `Solver + Sync + 'static` gets it through a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a puzzle
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        puzzle: PuzzleId,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: crate::solver::Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        puzzle: PuzzleId,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register(puzzle, S::PARTS, move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(puzzle, input)?))
        })
    }
}

/// Plugin information for automatic solver registration
///
/// Normally submitted by `#[derive(AutoRegisterSolver)]`; a manual
/// submission looks like this:
///
/// ```no_run
/// use advent_solver::{ParseError, PuzzleId, PuzzleParser, SolveError, Solver, SolverPlugin};
///
/// struct Day1Solver;
///
/// impl PuzzleParser for Day1Solver {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// advent_solver::inventory::submit! {
///     SolverPlugin {
///         puzzle: PuzzleId::aoc(2023, 1),
///         solver: &Day1Solver,
///         tags: &["2023", "easy"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The puzzle this plugin answers
    pub puzzle: PuzzleId,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering (e.g., "easy", "stacks", "2022")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Macro to register a solver type with a registry builder
///
/// Panics if the puzzle is already registered or outside the calendar.
///
/// # Example
///
/// ```
/// use advent_solver::{
///     register_solver, ParseError, PuzzleId, PuzzleParser, SolveError, Solver,
///     SolverRegistryBuilder,
/// };
///
/// struct MyDay1Solver;
///
/// impl PuzzleParser for MyDay1Solver {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for MyDay1Solver {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// let mut builder = SolverRegistryBuilder::new();
/// register_solver!(builder, MyDay1Solver, PuzzleId::aoc(2023, 1));
/// let registry = builder.build();
/// assert!(registry.contains(PuzzleId::aoc(2023, 1)));
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $puzzle:expr) => {
        let puzzle: $crate::PuzzleId = $puzzle;
        $builder = $builder
            .register(
                puzzle,
                <$solver as $crate::Solver>::PARTS,
                move |input: &str| {
                    Ok(Box::new($crate::SolverInstance::<$solver>::new(
                        puzzle, input,
                    )?))
                },
            )
            .expect("Failed to register solver");
    };
}
