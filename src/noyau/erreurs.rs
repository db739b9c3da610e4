// src/noyau/erreurs.rs
//
// Taxinomie d'erreurs du noyau.
// - ErreurLexique : rejet au découpage (symbole inconnu, nombre mal formé)
// - ErreurEval    : rejet au parse ou à l'évaluation (syntaxe, division par zéro, domaine)
// - ErreurCalc    : union des deux, type d'erreur de l'API moteur
//
// Chaque variante porte un message affichable tel quel à l'écran.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurLexique {
    /// Caractère ou mot que le découpage ne reconnaît pas (ex: '$', "Sqrt", "log").
    #[error("symbole inconnu: '{0}'")]
    SymboleInconnu(String),

    /// Suite de chiffres/points invalide (ex: "1.2.3", ".").
    #[error("nombre mal formé: '{0}'")]
    NombreMalForme(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Structure invalide : parenthèses déséquilibrées, opérande manquante, entrée vide...
    #[error("syntaxe: {0}")]
    Syntaxe(String),

    /// Division ou modulo par zéro (les deux zéros IEEE comptent).
    #[error("division par zéro")]
    DivisionParZero,

    /// Argument hors domaine (ln(0), sqrt(-1), ...) ou résultat non fini.
    #[error("domaine: {0}")]
    Domaine(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    #[error(transparent)]
    Lexique(#[from] ErreurLexique),

    #[error(transparent)]
    Eval(#[from] ErreurEval),
}
