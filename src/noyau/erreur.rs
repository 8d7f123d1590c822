// src/noyau/erreur.rs
//
// Erreurs du noyau.
// Chaque variante termine l’expression courante, jamais la session :
// le shell (console ou UI) affiche le message puis continue.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Numéral vide, caractère hors alphabet, base hors [2,36], valeur négative, exposant hors u32.
    #[error("argument invalide : {0}")]
    ArgumentInvalide(String),

    #[error("parenthèses non équilibrées")]
    ParenthesesDesequilibrees,

    /// Opérateur sans assez d’opérandes, ou reste de pile après réduction.
    #[error("expression invalide : {0}")]
    ExpressionInvalide(String),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("opérateur inconnu : '{0}'")]
    OperateurInconnu(char),

    /// Garde-fou (voir limites.rs).
    #[error("limite dépassée : {0}")]
    LimiteDepassee(String),
}

impl ErreurCalcul {
    pub fn argument(msg: impl Into<String>) -> Self {
        ErreurCalcul::ArgumentInvalide(msg.into())
    }

    pub fn expression(msg: impl Into<String>) -> Self {
        ErreurCalcul::ExpressionInvalide(msg.into())
    }
}
