// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Précédences (du plus lâche au plus serré) :
//   1  +  - (binaire)
//   2  *  /  %
//   3  moins unaire
//   4  ^  (associatif à droite)
//   5  fonctions (préfixes)
//
// Règles:
// - Moins unaire:
//    - si '-' arrive quand on n'attend PAS une valeur, on injecte 0 en sortie
//      et on empile une entrée dédiée : "-x" => "0 x -"
//    - sa précédence le place sous '^' et sur '%' : -2^2 = -(2^2),
//      mais -5 % 3 = (-5) % 3
// - Fonctions:
//    - préfixes de précédence maximale, parenthèses facultatives :
//      "sqrt 16 + 9" = sqrt(16) + 9, "sqrt 2^2" = (sqrt 2)^2
// - Une valeur fermée n'est suivie que d'un opérateur ou de ')' :
//   "2 3", "2 sqrt", "2(3)" sont des erreurs de syntaxe.
// - Une parenthèse fermante sans ouvrante est une erreur de syntaxe.

use super::erreurs::ErreurEval;
use super::expr::Expr;
use super::fonctions::Fonction;
use super::jetons::Tok;

/// Entrées de la pile d'opérateurs.
/// Le moins unaire et les fonctions ont leur propre niveau : ils ne
/// partagent pas la précédence du jeton binaire correspondant.
#[derive(Clone, Copy, Debug)]
enum OpPile {
    Binaire(Tok),
    MoinsUnaire,
    Fonction(Fonction),
    LPar,
}

fn precedence_binaire(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::Percent => 2,
        Tok::Caret => 4,
        _ => 0,
    }
}

fn precedence(op: &OpPile) -> i32 {
    match op {
        OpPile::LPar => 0,
        OpPile::Binaire(t) => precedence_binaire(t),
        OpPile::MoinsUnaire => 3,
        OpPile::Fonction(_) => 5,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret)
}

/// Restitue le jeton de sortie d'une entrée de pile.
/// Le moins unaire redevient un Minus : son 0 gauche est déjà en sortie.
fn sortie(op: OpPile) -> Tok {
    match op {
        OpPile::Binaire(t) => t,
        OpPile::MoinsUnaire => Tok::Minus,
        OpPile::Fonction(f) => Tok::Fonction(f),
        OpPile::LPar => unreachable!(),
    }
}

/// Dépile vers la sortie tant que la précédence l'exige pour `tok` (binaire).
fn depile_pour(tok: &Tok, ops: &mut Vec<OpPile>, out: &mut Vec<Tok>) {
    let p_tok = precedence_binaire(tok);

    while let Some(top) = ops.last() {
        if matches!(top, OpPile::LPar) {
            break;
        }

        let p_top = precedence(top);
        let doit_pop = if is_right_associative(tok) {
            p_top > p_tok
        } else {
            p_top >= p_tok
        };

        if doit_pop {
            out.push(sortie(ops.pop().unwrap()));
        } else {
            break;
        }
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonction(Sqrt), Num(16), Plus, Num(9)]
///   rpn:    [Num(16), Fonction(Sqrt), Num(9), Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<OpPile> = Vec::new();

    // "valeur" = un atome ou une expression fermée.
    // Tranche le moins unaire du binaire et rejette les juxtapositions.
    let mut prev_was_value = false;

    for tok in tokens.iter().copied() {
        // après une valeur fermée, seul un opérateur (ou ')') peut suivre ;
        // "2 sqrt" n'est pas une application postfixe, c'est une erreur
        if prev_was_value && matches!(tok, Tok::Num(_) | Tok::Fonction(_) | Tok::LPar) {
            return Err(ErreurEval::Syntaxe("opérateur attendu".into()));
        }

        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Fonction(f) => {
                // préfixe : empilée sans rien dépiler (rien à sa gauche ne la lie)
                ops.push(OpPile::Fonction(f));
                prev_was_value = false;
            }

            Tok::LPar => {
                ops.push(OpPile::LPar);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu'à '(' ; les préfixes internes sortent au passage
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, OpPile::LPar) {
                        ouverte = true;
                        break;
                    }
                    out.push(sortie(top));
                }
                if !ouverte {
                    return Err(ErreurEval::Syntaxe("parenthèse fermante orpheline".into()));
                }
                prev_was_value = true;
            }

            Tok::Plus | Tok::Star | Tok::Slash | Tok::Caret | Tok::Percent => {
                depile_pour(&tok, &mut ops, &mut out);
                ops.push(OpPile::Binaire(tok));
                prev_was_value = false;
            }

            Tok::Minus => {
                if prev_was_value {
                    depile_pour(&Tok::Minus, &mut ops, &mut out);
                    ops.push(OpPile::Binaire(Tok::Minus));
                } else {
                    // moins unaire : 0 en sortie tout de suite, entrée dédiée en pile
                    out.push(Tok::Num(0.0));
                    ops.push(OpPile::MoinsUnaire);
                }
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, OpPile::LPar) {
            return Err(ErreurEval::Syntaxe("parenthèses non fermées".into()));
        }
        out.push(sortie(op));
    }

    Ok(out)
}

/// Construit une Expr à partir d'une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurEval> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().copied() {
        match tok {
            Tok::Num(x) => st.push(Expr::Num(x)),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret | Tok::Percent => {
                let b = st
                    .pop()
                    .ok_or_else(|| ErreurEval::Syntaxe("expression invalide".into()))?;
                let a = st
                    .pop()
                    .ok_or_else(|| ErreurEval::Syntaxe("expression invalide".into()))?;

                let e = match tok {
                    Tok::Plus => Expr::Add(Box::new(a), Box::new(b)),
                    Tok::Minus => Expr::Sub(Box::new(a), Box::new(b)),
                    Tok::Star => Expr::Mul(Box::new(a), Box::new(b)),
                    Tok::Slash => Expr::Div(Box::new(a), Box::new(b)),
                    Tok::Caret => Expr::Pow(Box::new(a), Box::new(b)),
                    Tok::Percent => Expr::Rem(Box::new(a), Box::new(b)),
                    _ => unreachable!(),
                };
                st.push(e);
            }

            Tok::Fonction(f) => {
                let x = st
                    .pop()
                    .ok_or_else(|| ErreurEval::Syntaxe("fonction sans argument".into()))?;
                st.push(Expr::Fonction(f, Box::new(x)));
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurEval::Syntaxe("parenthèse inattendue en RPN".into()))
            }
        }
    }

    if st.len() != 1 {
        return Err(ErreurEval::Syntaxe("expression invalide".into()));
    }
    Ok(st.pop().unwrap())
}
