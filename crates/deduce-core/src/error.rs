/// Reasons a problem description is rejected.
///
/// Construction fails closed: when any of these is returned, no
/// [`Problem`](crate::Problem) exists.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ProblemError {
    /// The variable list is empty.
    #[display("problem has no variables")]
    NoVariables,
    /// A variable name is declared twice.
    #[display("variable `{name}` is declared more than once")]
    DuplicateVariable {
        /// The repeated name.
        name: String,
    },
    /// The alphabet has no symbols.
    #[display("alphabet is empty")]
    EmptyAlphabet,
    /// An alphabet entry is not exactly one character.
    #[display("alphabet entry `{symbol}` is not a single symbol")]
    MultiSymbolValue {
        /// The offending entry.
        symbol: String,
    },
    /// A symbol appears twice in the alphabet.
    #[display("symbol `{symbol}` appears more than once in the alphabet")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: char,
    },
    /// The alphabet is larger than a candidate set can hold.
    #[display("alphabet has {len} symbols, at most {max} are supported")]
    AlphabetTooLarge {
        /// Number of symbols given.
        len: usize,
        /// Largest supported alphabet.
        max: usize,
    },
    /// A constraint group names a variable that was never declared.
    #[display("constraint group {group} references unknown variable `{name}`")]
    UnknownGroupMember {
        /// Index of the group in declaration order.
        group: usize,
        /// The unknown name.
        name: String,
    },
    /// A constraint group lists the same variable twice.
    #[display("constraint group {group} lists variable `{name}` more than once")]
    DuplicateGroupMember {
        /// Index of the group in declaration order.
        group: usize,
        /// The repeated name.
        name: String,
    },
    /// An initial value or assignment targets a variable that does not exist.
    #[display("unknown variable `{name}`")]
    UnknownVariable {
        /// The unknown name or index.
        name: String,
    },
    /// An initial value uses a symbol outside the alphabet.
    #[display("initial value for `{variable}` contains `{symbol}`, which is not in the alphabet")]
    SymbolOutsideAlphabet {
        /// The variable the value was given for.
        variable: String,
        /// The foreign symbol.
        symbol: char,
    },
    /// An initial value is the empty string.
    #[display("initial value for `{variable}` is empty")]
    EmptyInitialValue {
        /// The variable the value was given for.
        variable: String,
    },
}
