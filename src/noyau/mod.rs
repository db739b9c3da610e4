//! Noyau de calcul (f64)
//!
//! Organisation interne :
//! - erreurs.rs    : taxinomie d'erreurs (lexique / évaluation / calcul)
//! - jetons.rs     : tokenisation
//! - fonctions.rs  : table des fonctions unaires (exp, ln, log10, log2, sqrt)
//! - expr.rs       : AST
//! - rpn.rs        : shunting-yard + construction Expr
//! - eval.rs       : pipeline complet
//! - format.rs     : rendu décimal à sept chiffres significatifs
//! - historique.rs : journal des calculs réussis
//! - moteur.rs     : façade pour l'UI (soumettre / historique / vider)

pub mod erreurs;
pub mod eval;
pub mod expr;
pub mod fonctions;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod moteur;
pub mod rpn;

#[cfg(test)]
mod tests_arithmetique;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale : le reste du binaire passe par la façade.
pub use moteur::Moteur;
