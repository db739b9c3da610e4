// src/noyau/moteur.rs
//
// Façade du noyau pour l'UI :
// - soumettre : évalue, journalise si succès, rend le résultat affichable
// - accès et purge de l'historique
//
// Contrat : un échec (lexique, syntaxe, domaine, division par zéro)
// ne touche jamais à l'historique.

use log::{debug, warn};

use super::erreurs::ErreurCalc;
use super::eval::evaluer;
use super::format::format_7g;
use super::historique::{EntreeHistorique, Historique};

#[derive(Clone, Debug, Default)]
pub struct Moteur {
    historique: Historique,
}

impl Moteur {
    /// Évalue `entree`, journalise le succès, retourne le résultat rendu
    /// (sept chiffres significatifs, voir `format_7g`).
    pub fn soumettre(&mut self, entree: &str) -> Result<String, ErreurCalc> {
        match evaluer(entree) {
            Ok(valeur) => {
                let rendu = format_7g(valeur);
                let ligne = self.historique.enregistrer(entree, &rendu).ligne();
                debug!("soumission journalisée: {ligne}");
                Ok(rendu)
            }
            Err(e) => {
                warn!("soumission {entree:?} rejetée: {e}");
                Err(e)
            }
        }
    }

    pub fn historique(&self) -> &[EntreeHistorique] {
        self.historique.entrees()
    }

    pub fn vider_historique(&mut self) {
        self.historique.vider();
    }
}
