use chrono::Datelike;
use yew::prelude::*;

use super::table::ElementId;
use crate::config;

#[derive(Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub kind: &'static str,
    pub location: &'static str,
    pub surface: &'static str,
    pub year: u16,
    pub image: &'static str,
    pub alt: &'static str,
    pub image_element: ElementId,
    pub text_element: ElementId,
    /// Image on the left, text on the right.
    pub image_first: bool,
    pub accent: bool,
}

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "SERENE",
        kind: "Construction d'une Villa",
        location: "MALIBU",
        surface: "320m²",
        year: 2024,
        image: "/assets/project-villa.jpg",
        alt: "SERENE Villa",
        image_element: ElementId::SereneImage,
        text_element: ElementId::SereneText,
        image_first: true,
        accent: true,
    },
    Project {
        title: "HAVEN",
        kind: "Création d'un complexe hôtelier",
        location: "TULUM",
        surface: "1 800m²",
        year: 2024,
        image: "/assets/project-hotel.jpg",
        alt: "HAVEN Hotel",
        image_element: ElementId::HavenImage,
        text_element: ElementId::HavenText,
        image_first: false,
        accent: false,
    },
    Project {
        title: "NEXUS",
        kind: "Aménagement d'un espace de bureaux",
        location: "BROOKLYN",
        surface: "680m²",
        year: 2023,
        image: "/assets/project-office.jpg",
        alt: "NEXUS Office",
        image_element: ElementId::NexusImage,
        text_element: ElementId::NexusText,
        image_first: true,
        accent: true,
    },
];

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hint_style: String,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section class="stage-section hero">
            <div class="hero-intro">
                <div class="hero-monogram">
                    <svg viewBox="0 0 200 200" stroke="currentColor" fill="none" stroke-width="0.5">
                        <circle cx="100" cy="100" r="95" />
                        <text x="100" y="120" text-anchor="middle" fill="currentColor" stroke="none">{"SA"}</text>
                    </svg>
                </div>
                <h1>{"Studio Arch"}</h1>
                <p class="hero-tagline">{"Contemporary Architecture & Design"}</p>
            </div>

            <div class="hero-hint" style={props.hint_style.clone()}>
                <div class="hero-hint-inner">
                    <div class="hero-hint-line"></div>
                    <p>{"Scroll"}</p>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub image_style: String,
    pub text_style: String,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    html! {
        <section class="stage-section about">
            <div class="split">
                <div class="media half">
                    <img src="/assets/hero-architecture.jpg" alt="Studio" style={props.image_style.clone()} />
                </div>
                <div class="copy half">
                    <div class="copy-block wide" style={props.text_style.clone()}>
                        <h2>{"L'Agence"}</h2>
                        <div class="copy-body">
                            <p>
                                {"Fondée en 2018, Studio Arch développe des projets singuliers, portés par une vision affirmée de l'architecture, entre précision technique, approche durable et sensibilité esthétique."}
                            </p>
                            <p>
                                {"Chaque projet conçu par l'atelier est unique, sur mesure, inédit. Raconter une histoire, affirmer une identité, respecter un lieu."}
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectProps {
    pub project: &'static Project,
    pub image_style: String,
    pub text_style: String,
}

#[function_component(ProjectShowcase)]
pub fn project_showcase(props: &ProjectProps) -> Html {
    let project = props.project;

    let media = html! {
        <div class="media wide">
            <img src={project.image} alt={project.alt} style={props.image_style.clone()} />
        </div>
    };
    let copy = html! {
        <div class="copy narrow">
            <div class="copy-block" style={props.text_style.clone()}>
                <h3>{project.title}</h3>
                <p class="project-kind">{project.kind}</p>
                <p class="project-location">{project.location}</p>
                <p class="project-meta">{format!("Surface {} _ {}", project.surface, project.year)}</p>
            </div>
        </div>
    };

    let (first, second) = if project.image_first {
        (media, copy)
    } else {
        (copy, media)
    };

    html! {
        <section class={classes!("stage-section", "project", project.accent.then(|| "accent"))}>
            <div class="split">
                { first }
                { second }
            </div>
        </section>
    }
}

pub fn mailto_href() -> String {
    format!(
        "mailto:{}?subject={}",
        config::CONTACT_EMAIL,
        urlencoding::encode(config::CONTACT_SUBJECT)
    )
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub style: String,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <section class="stage-section contact">
            <div class="contact-block" style={props.style.clone()}>
                <h2>{"Contact"}</h2>
                <p class="contact-lead">{"Pour discuter de votre projet d'architecture"}</p>
                <a href={mailto_href()} class="contact-link">{config::CONTACT_EMAIL}</a>
                <div class="contact-footer">
                    {format!("Studio Arch © {} | Tous droits réservés", year)}
                </div>
            </div>
        </section>
    }
}
