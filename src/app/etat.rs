//! src/app/etat.rs
//!
//! État UI (sans vue, sans parsing).
//!
//! Rôle : contenir l'état de la calculatrice (entrée, résultat rendu, erreur,
//! panneau historique, moteur) et offrir des opérations simples (C/CLR/AC)
//! sans logique d'affichage.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Moteur` (appelé depuis vue.rs).
//! - Actions déterministes, sans effet de bord caché.

use crate::noyau::Moteur;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // dernier résultat rendu (7 chiffres significatifs)
    pub erreur: String,   // message d'erreur (si lexique/évaluation échoue)

    // --- panneau historique ---
    pub historique_visible: bool,

    // --- noyau ---
    pub moteur: Moteur,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            historique_visible: false,
            moteur: Moteur::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions "boutons" (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + historique).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.moteur.vider_historique();
        self.focus_entree = true;
    }

    /// C : effacer seulement l'entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur (sans toucher à l'entrée ni à l'historique).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `resultat` (dernier calcul réussi) : l'affichage bascule
    ///   sur l'erreur tant qu'elle n'est pas levée, puis le retrouve.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat rendu (efface l'erreur).
    pub fn set_resultat(&mut self, rendu: impl Into<String>) {
        self.erreur.clear();
        self.resultat = rendu.into();
        self.focus_entree = true;
    }

    /// Replie/déplie le panneau historique.
    pub fn basculer_historique(&mut self) {
        self.historique_visible = !self.historique_visible;
    }

    /// Rappelle une entrée de l'historique dans le champ de saisie.
    /// L'erreur courante est levée au passage.
    pub fn rappeler(&mut self, entree: String) {
        self.entree = entree;
        self.erreur.clear();
        self.focus_entree = true;
    }
}
