//! Noyau : évaluation (pipeline réel)
//!
//! tokenize -> RPN -> Expr -> valeur f64 -> contrôle de finitude
//!
//! Les contrôles de domaine des fonctions vivent dans `Fonction::appliquer` ;
//! ici vivent les deux diviseurs zéro (`/` et `%`), le plafond de longueur
//! d'entrée et le rejet des résultats non finis (dépassement f64, forme
//! indéterminée).

use super::erreurs::{ErreurCalc, ErreurEval};
use super::expr::Expr;
use super::jetons::{tokenize, Tok};
use super::rpn::{from_rpn, to_rpn};

// La descente d'évaluation et le Drop de l'arbre sont récursifs ; leur
// profondeur est bornée par le nombre de jetons acceptés.
const JETONS_MAX: usize = 4_000;

/// Évalue un arbre. Les opérandes sont évaluées de gauche à droite.
///
/// `%` est le reste "plancher" (signe du diviseur) : -5 % 3 = 1.
pub fn eval_expr(e: &Expr) -> Result<f64, ErreurEval> {
    use Expr::*;

    Ok(match e {
        Num(x) => *x,

        Fonction(f, x) => f.appliquer(eval_expr(x)?)?,

        Add(a, b) => eval_expr(a)? + eval_expr(b)?,
        Sub(a, b) => eval_expr(a)? - eval_expr(b)?,
        Mul(a, b) => eval_expr(a)? * eval_expr(b)?,

        Div(a, b) => {
            let n = eval_expr(a)?;
            let d = eval_expr(b)?;
            if d == 0.0 {
                return Err(ErreurEval::DivisionParZero);
            }
            n / d
        }

        Rem(a, b) => {
            let n = eval_expr(a)?;
            let d = eval_expr(b)?;
            if d == 0.0 {
                return Err(ErreurEval::DivisionParZero);
            }
            n - d * (n / d).floor()
        }

        Pow(a, b) => {
            let base = eval_expr(a)?;
            let exp = eval_expr(b)?;
            base.powf(exp)
        }
    })
}

/// Évalue une suite de jetons déjà découpée.
///
/// Une suite vide, ou plus longue que `JETONS_MAX`, est une erreur de
/// syntaxe. Un résultat non fini (ex: exp(1000), (-8)^0.5) est rejeté en
/// erreur de domaine.
pub fn evaluer_jetons(jetons: &[Tok]) -> Result<f64, ErreurEval> {
    if jetons.is_empty() {
        return Err(ErreurEval::Syntaxe("expression vide".into()));
    }
    if jetons.len() > JETONS_MAX {
        return Err(ErreurEval::Syntaxe("expression trop longue".into()));
    }

    let rpn = to_rpn(jetons)?;
    let expr = from_rpn(&rpn)?;
    let valeur = eval_expr(&expr)?;

    if !valeur.is_finite() {
        return Err(ErreurEval::Domaine("résultat non fini".into()));
    }

    Ok(valeur)
}

/// API publique : évalue une expression texte.
pub fn evaluer(s: &str) -> Result<f64, ErreurCalc> {
    let jetons = tokenize(s)?;
    let valeur = evaluer_jetons(&jetons)?;
    Ok(valeur)
}
