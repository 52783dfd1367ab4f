//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l'état de la calculatrice — un seul champ texte qui sert
//! à la fois d'entrée et d'affichage du résultat — et offrir des actions
//! simples (C, DEL) sans logique d'affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas d'analyse).
//! - Le champ reçoit le retour du noyau TEL QUEL : pas de validation, pas
//!   de reformatage, pas de reprise côté coquille.

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur, puis résultat (même champ) ---
    pub entree: String,

    // --- UX ---
    // Permet à vue.rs de redonner le focus au champ après un clic bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /// C : effacer le champ.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// DEL : retirer le dernier symbole.
    /// "sqrt(" est retiré d'un coup (il a été inséré d'un coup).
    pub fn backspace_entree(&mut self) {
        if self.entree.ends_with("sqrt(") {
            for _ in 0.."sqrt(".len() {
                self.entree.pop();
            }
        } else {
            self.entree.pop();
        }
        self.focus_entree = true;
    }
}
