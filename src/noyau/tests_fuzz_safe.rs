//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - le générateur n'émet que des expressions grammaticalement valides :
//!   toute erreur de lexique ou de syntaxe est donc un bug du parse
//! - invariant clé : si l'évaluation réussit, la valeur est finie

use std::time::{Duration, Instant};

use super::erreurs::{ErreurCalc, ErreurEval};
use super::eval::evaluer;
use super::format::format_7g;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn est_erreur_attendue(e: &ErreurCalc) -> bool {
    // Liste blanche : les seules erreurs *normales* sur une expression
    // bien formée. Lexique et syntaxe sont volontairement exclues.
    matches!(
        e,
        ErreurCalc::Eval(ErreurEval::DivisionParZero) | ErreurCalc::Eval(ErreurEval::Domaine(_))
    )
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let a = match rng.pick(9) {
        0 => "0",
        1 => "1",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        _ => "9",
    };

    if rng.coin() {
        let b = match rng.pick(4) {
            0 => "5",
            1 => "25",
            2 => "75",
            _ => "125",
        };
        format!("{a}.{b}")
    } else {
        a.to_string()
    }
}

fn gen_fonction(rng: &mut Rng) -> &'static str {
    match rng.pick(5) {
        0 => "exp",
        1 => "ln",
        2 => "log10",
        3 => "log2",
        _ => "sqrt",
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(10) {
        0 | 1 => gen_nombre(rng),
        2 => format!(
            "({}+{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        3 => format!(
            "({}-{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        4 => format!(
            "({}*{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        5 => format!(
            "({}/{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        6 => format!(
            "({} mod {})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        7 => format!("-{}", gen_expr(rng, depth - 1)),
        8 => {
            let f = gen_fonction(rng);
            if rng.coin() {
                format!("{f}({})", gen_expr(rng, depth - 1))
            } else {
                // forme préfixe sans parenthèses, sur un atome
                format!("{f} {}", gen_nombre(rng))
            }
        }
        _ => {
            // exposant borné (y compris négatif) pour limiter les dépassements
            let e = rng.pick(8) as i32 - 3; // -3..=4
            format!("({}^{e})", gen_nombre(rng))
        }
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_jamais_de_panique_et_valeurs_finies() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..120 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);

        match evaluer(&expr) {
            Ok(v) => {
                assert!(v.is_finite(), "succès non fini: expr={expr:?} v={v}");
                assert!(!format_7g(v).is_empty());
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    est_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne "balaye" rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop \"sage\"");
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes expressions => mêmes sorties.
    let passe = |seed: u64| -> Vec<Result<f64, ErreurCalc>> {
        let mut rng = Rng::new(seed);
        (0..60).map(|_| evaluer(&gen_expr(&mut rng, 4))).collect()
    };

    let a = passe(0xBADC0DE_u64);
    budget(t0, max);
    let b = passe(0xBADC0DE_u64);

    assert_eq!(a, b);
}

#[test]
fn fuzz_safe_fonctions_dans_domaine() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..80 {
        budget(t0, max);

        let f = gen_fonction(&mut rng);
        let v = gen_nombre(&mut rng);
        let expr = if rng.coin() {
            format!("{f}(-{v})")
        } else {
            format!("{f}({v})")
        };

        match evaluer(&expr) {
            Ok(x) => assert!(x.is_finite(), "expr={expr:?} x={x}"),
            Err(e) => {
                // seuls les arguments hors domaine (négatifs, zéro) doivent échouer
                assert!(
                    matches!(e, ErreurCalc::Eval(ErreurEval::Domaine(_))),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
            }
        }
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("0.5", 800);
    budget(t0, max);

    let v = evaluer(&expr).unwrap_or_else(|e| panic!("err: {e}"));

    // 800*(0.5) = 400
    assert_eq!(format_7g(v), "400");
}
