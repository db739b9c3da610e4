// src/noyau/fonctions.rs
//
// Table des fonctions unaires (exp, ln, log10, log2, sqrt)
// --------------------------------------------------------
// - vocabulaire fermé : un tag par fonction, pas de résolution dynamique
// - les contrôles de domaine vivent ici, au plus près du calcul

use super::erreurs::ErreurEval;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Exp,
    Ln,
    Log10,
    Log2,
    Sqrt,
}

impl Fonction {
    /// Résolution d'un mot-clé (sensible à la casse).
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        match nom {
            "exp" => Some(Fonction::Exp),
            "ln" => Some(Fonction::Ln),
            "log10" => Some(Fonction::Log10),
            "log2" => Some(Fonction::Log2),
            "sqrt" => Some(Fonction::Sqrt),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Exp => "exp",
            Fonction::Ln => "ln",
            Fonction::Log10 => "log10",
            Fonction::Log2 => "log2",
            Fonction::Sqrt => "sqrt",
        }
    }

    /// Applique la fonction à `x`.
    ///
    /// Domaines:
    /// - ln, log10, log2 : x > 0 (le logarithme de 0 est rejeté, pas "-inf")
    /// - sqrt            : x >= 0
    /// - exp             : total (le dépassement éventuel est attrapé en aval,
    ///   par le contrôle de finitude du pipeline)
    pub fn appliquer(self, x: f64) -> Result<f64, ErreurEval> {
        match self {
            Fonction::Exp => Ok(x.exp()),

            Fonction::Ln | Fonction::Log10 | Fonction::Log2 => {
                if x <= 0.0 {
                    return Err(ErreurEval::Domaine(format!(
                        "{} exige un argument strictement positif",
                        self.nom()
                    )));
                }
                match self {
                    Fonction::Ln => Ok(x.ln()),
                    Fonction::Log10 => Ok(x.log10()),
                    Fonction::Log2 => Ok(x.log2()),
                    _ => unreachable!(),
                }
            }

            Fonction::Sqrt => {
                if x < 0.0 {
                    return Err(ErreurEval::Domaine(
                        "sqrt exige un argument positif ou nul".into(),
                    ));
                }
                Ok(x.sqrt())
            }
        }
    }
}
