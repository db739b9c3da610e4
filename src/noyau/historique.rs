// src/noyau/historique.rs
//
// Journal des calculs réussis.
// - une entrée par évaluation réussie, dans l'ordre de soumission
// - les doublons sont conservés (la déduplication est un choix d'affichage)
// - le journal vit en mémoire et meurt avec la session

/// Une ligne d'historique : l'entrée telle que soumise + le résultat rendu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    pub entree: String,
    pub resultat: String,
}

impl EntreeHistorique {
    /// Forme affichable "entrée=résultat" (ex: "2+2=4").
    pub fn ligne(&self) -> String {
        format!("{}={}", self.entree, self.resultat)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: Vec<EntreeHistorique>,
}

impl Historique {
    /// Ajoute une entrée en fin de journal et la retourne.
    pub fn enregistrer(&mut self, entree: &str, resultat: &str) -> &EntreeHistorique {
        self.entrees.push(EntreeHistorique {
            entree: entree.to_string(),
            resultat: resultat.to_string(),
        });
        self.entrees.last().unwrap()
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }

    pub fn entrees(&self) -> &[EntreeHistorique] {
        &self.entrees
    }
}
