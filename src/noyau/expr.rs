// src/noyau/expr.rs
//
// AST flottant (f64).
// - Num : littéral
// - Fonction : application unaire (exp, ln, log10, log2, sqrt)
// - un variant par opérateur binaire
//
// Le moins unaire n'a pas de variant : le parse l'abaisse en Sub(0, x),
// ce qui garde l'arbre fermé sur les formes ci-dessous.

use std::fmt;

use super::fonctions::Fonction;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),

    Fonction(Fonction, Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Rem(Box<Expr>, Box<Expr>),
}

/* ------------------------ Affichage debug (structure parenthésée) ------------------------ */

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;
        match self {
            Num(x) => write!(f, "{x}"),
            Fonction(g, x) => write!(f, "{}({x})", g.nom()),
            Add(a, b) => write!(f, "({a}+{b})"),
            Sub(a, b) => write!(f, "({a}-{b})"),
            Mul(a, b) => write!(f, "({a}*{b})"),
            Div(a, b) => write!(f, "({a}/{b})"),
            Pow(a, b) => write!(f, "({a}^{b})"),
            Rem(a, b) => write!(f, "({a}%{b})"),
        }
    }
}
