use crate::{
    content::{
        model::{Benefit, Platform, Step, StepList, VisualRef},
        provider::StepContentProvider,
    },
    foundation::error::TourlineResult,
};

/// Release page the download steps link to.
pub const REPO_URL: &str = "https://github.com/theocode29/Communokot-Launcher/releases/latest";

/// Quarantine removal command shown on the last macOS tour step.
pub const MAC_QUARANTINE_COMMAND: &str = r#"xattr -cr "/Applications/Communokot Launcher.app""#;

/// Game directory on Windows.
pub const WINDOWS_GAME_DIR: &str = r"%appdata%\.minecraft";

/// Game directory on macOS.
pub const MAC_GAME_DIR: &str = "~/Library/Application Support/minecraft";

/// Built-in launcher installation content.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinContent;

impl BuiltinContent {
    fn windows_tour() -> Vec<Step> {
        vec![
            Step::new(
                0,
                "Télécharger l'installateur",
                "Récupère le dernier fichier Communokot.exe depuis les releases GitHub.",
            )
            .with_action("Télécharger .exe", REPO_URL)
            .with_visual(VisualRef::Download),
            Step::new(
                1,
                "Lancer l'application",
                "Localise le fichier dans tes téléchargements et double-clique pour le lancer.",
            )
            .with_visual(VisualRef::DoubleClick),
            Step::new(
                2,
                "Contourner SmartScreen",
                "Si Windows protège ton PC, clique sur 'Informations complémentaires' puis \
                 'Exécuter quand même'.",
            )
            .with_visual(VisualRef::SmartScreen),
        ]
    }

    fn mac_tour() -> Vec<Step> {
        vec![
            Step::new(
                0,
                "Télécharger l'application",
                "Récupère le fichier Communokot.zip ou .dmg depuis GitHub.",
            )
            .with_action("Télécharger pour Mac", REPO_URL)
            .with_visual(VisualRef::Download),
            Step::new(
                1,
                "Installation",
                "Glisse l'application Communokot Launcher dans ton dossier Applications.",
            )
            .with_visual(VisualRef::DragDrop),
            Step::new(
                2,
                "Premier lancement",
                "Fais un clic droit sur l'app et sélectionne 'Ouvrir' pour valider la sécurité.",
            )
            .with_visual(VisualRef::RightClick),
            Step::new(
                3,
                "Ouvrir le Terminal",
                "Ouvre Spotlight (Cmd + Espace), tape 'Terminal' et appuie sur Entrée.",
            )
            .with_visual(VisualRef::Spotlight),
            Step::new(
                4,
                "Correction Sécurité",
                "Copie la commande ci-dessous et colle-la dans le Terminal pour autoriser \
                 l'application.",
            )
            .with_command(MAC_QUARANTINE_COMMAND)
            .with_visual(VisualRef::Terminal),
        ]
    }

    fn game_dir_step(platform: Platform) -> Step {
        let step = match platform {
            Platform::Windows => Step::new(
                4,
                "Chemin d'accès",
                "Clique sur Parcourir. Fais Win + R, tape exactement %appdata%\\.minecraft et \
                 valide. Le dossier s'ouvrira : clique simplement sur Ouvrir pour confirmer.",
            )
            .with_command(WINDOWS_GAME_DIR),
            Platform::Mac => Step::new(
                4,
                "Chemin d'installation",
                "Clique sur Parcourir. Fais Cmd + Shift + G, colle le chemin \
                 ~/Library/Application Support/minecraft et valide. Termine en cliquant sur \
                 Ouvrir.",
            )
            .with_command(MAC_GAME_DIR),
        };
        step.with_visual(VisualRef::FilesTutorial(platform))
    }
}

impl StepContentProvider for BuiltinContent {
    fn tour_steps(&self, platform: Platform) -> TourlineResult<StepList> {
        StepList::new(match platform {
            Platform::Windows => Self::windows_tour(),
            Platform::Mac => Self::mac_tour(),
        })
    }

    fn configuration_steps(&self, platform: Platform) -> TourlineResult<StepList> {
        StepList::new(vec![
            Step::new(
                0,
                "Compte & Jeu",
                "Connecte-toi avec ton pseudo. Assure-toi simplement que c'est bien celui \
                 enregistré sur le serveur.",
            )
            .with_visual(VisualRef::Account),
            Step::new(
                1,
                "Performances",
                "La RAM allouée au jeu. Par défaut, le launcher gère ça tout seul. Ne touche à \
                 rien si tu ne sais pas ce que tu fais.",
            )
            .with_visual(VisualRef::Ram),
            Step::new(
                2,
                "Optimisation",
                "Si tu ne sais pas quoi choisir, laisse sur Auto. Sinon, sélectionne le profil \
                 adapté à ta machine.",
            )
            .with_visual(VisualRef::Mods),
            Step::new(
                3,
                "Java & Fichiers",
                "Pour Java, laisse sur Auto. Pour le dossier Minecraft, il va falloir indiquer \
                 son emplacement précis.",
            )
            .with_visual(VisualRef::FilesIntro),
            Self::game_dir_step(platform),
        ])
    }

    fn benefits(&self) -> Vec<Benefit> {
        vec![
            Benefit::new(
                "Prêt à jouer instantanément",
                "Oublie l'installation manuelle de mods ou de Fabric. Le launcher configure \
                 automatiquement l'environnement Java et optimise les performances pour ta \
                 machine. Lance et joue, sans configuration technique.",
            ),
            Benefit::new(
                "Sauvegardes & Sécurité",
                "Tes mondes sont précieux. Le système effectue des backups automatiques avant \
                 chaque mise à jour critique et intègre un mode de réparation intelligent pour \
                 éviter toute corruption de données.",
            ),
            Benefit::new(
                "Expérience Unifiée",
                "Profite d'une interface fluide et gratuite. Une carte du monde interactive est \
                 intégrée nativement, et les mises à jour se font en arrière-plan pour que tu \
                 sois toujours synchronisé avec le serveur.",
            ),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/builtin.rs"]
mod tests;
