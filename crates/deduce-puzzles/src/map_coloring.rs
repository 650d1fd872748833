//! Map coloring: neighboring regions must get different colors.

use std::fmt::Write as _;

use deduce_core::{Problem, State, SymbolSet};

use crate::{PuzzleError, Render};

const AUSTRALIA_REGIONS: [(&str, &str); 6] = [
    ("WA", "Western Australia"),
    ("NT", "Northern Territory"),
    ("SA", "South Australia"),
    ("QL", "Queensland"),
    ("NSW", "New South Wales"),
    ("VT", "Victoria"),
];

const AUSTRALIA_COLORS: [(char, &str); 3] = [('R', "Red"), ('G', "Green"), ('B', "Blue")];

const AUSTRALIA_BORDERS: [&[&str]; 4] = [
    &["WA", "NT", "SA"],
    &["NT", "SA", "QL"],
    &["SA", "QL", "NSW"],
    &["SA", "NSW", "VT"],
];

/// A map whose regions are colored so that the members of every border
/// group differ.
///
/// Each region has a short code, used as the variable name, and a full name
/// used when rendering. Each color is a single-character symbol with a
/// display name.
#[derive(Debug, Clone)]
pub struct MapColoring {
    problem: Problem,
    region_names: Vec<String>,
    color_names: Vec<String>,
    initial: Vec<(String, String)>,
}

impl MapColoring {
    /// Creates a map from `(code, full name)` regions, `(symbol, name)`
    /// colors, border groups of region codes, and initial
    /// `(code, symbols)` restrictions.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Problem`] if the pieces do not form a valid
    /// problem, such as a border naming an unknown region.
    pub fn new(
        regions: &[(&str, &str)],
        colors: &[(char, &str)],
        borders: &[&[&str]],
        initial: &[(&str, &str)],
    ) -> Result<Self, PuzzleError> {
        let problem = Problem::builder()
            .variables(regions.iter().map(|&(code, _)| code))
            .alphabet_symbols(colors.iter().map(|(symbol, _)| symbol.to_string()))
            .groups(borders.iter().map(|border| border.iter().copied()))
            .initial_values(initial.iter().copied())
            .build()?;
        log::debug!(
            "map with {} regions and {} borders",
            problem.num_variables(),
            problem.groups().len()
        );

        Ok(Self {
            problem,
            region_names: regions.iter().map(|&(_, name)| name.to_owned()).collect(),
            color_names: colors.iter().map(|&(_, name)| name.to_owned()).collect(),
            initial: initial
                .iter()
                .map(|&(code, symbols)| (code.to_owned(), symbols.to_owned()))
                .collect(),
        })
    }

    /// Creates the map of mainland Australia colored red, green and blue.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Problem`] if `initial` names an unknown region
    /// or a color other than `R`, `G` or `B`.
    ///
    /// # Examples
    ///
    /// ```
    /// use deduce_puzzles::{MapColoring, Render};
    /// use deduce_solver::Solver;
    ///
    /// let map = MapColoring::australia(&[("SA", "B")])?;
    /// let solution = Solver::new().solve(map.problem())?;
    ///
    /// assert_eq!(solution.value(map.problem(), "SA"), Some('B'));
    /// assert_eq!(map.render_original(), "South Australia     : Blue\n");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn australia(initial: &[(&str, &str)]) -> Result<Self, PuzzleError> {
        Self::new(
            &AUSTRALIA_REGIONS,
            &AUSTRALIA_COLORS,
            &AUSTRALIA_BORDERS,
            initial,
        )
    }

    /// Returns the underlying problem.
    #[must_use]
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Returns the full name of the region with `code`.
    #[must_use]
    pub fn region_name(&self, code: &str) -> Option<&str> {
        let var = self.problem.var(code)?;
        Some(&self.region_names[var.index()])
    }

    fn color_list(&self, set: SymbolSet) -> String {
        set.iter()
            .map(|symbol| self.color_names[usize::from(symbol)].as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn push_line(&self, out: &mut String, name: &str, set: SymbolSet) {
        let _ = writeln!(out, "{name:<20}: {}", self.color_list(set));
    }
}

impl Render for MapColoring {
    fn render_state(&self, state: &State) -> String {
        let mut out = String::new();
        for var in self.problem.variables() {
            self.push_line(&mut out, &self.region_names[var.index()], state.candidates(var));
        }
        out
    }

    fn render_original(&self) -> String {
        let mut out = String::new();
        for (code, symbols) in &self.initial {
            let (Some(name), Ok(set)) = (
                self.region_name(code),
                self.problem.alphabet().parse_set(symbols),
            ) else {
                continue;
            };
            self.push_line(&mut out, name, set);
        }
        out
    }
}
