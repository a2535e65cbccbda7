use leptos::prelude::*;

use super::reveal::AnimatedSection;
use crate::{
    content::{ActivityEntry, EducationEntry, ProjectEntry, SkillCategory, WorkExperienceEntry},
    sections::{Section, TimelineSide},
};

#[component]
fn Tags(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="project-tags">
            {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
        </div>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id()>
            <AnimatedSection>
                <h2>{Section::About.title()}</h2>
                <p>
                    "My journey began in Electronics & Communication Engineering, where I developed a deep appreciation for complex systems. However, I quickly realized my true passion lies in a different kind of system: the ecosystem of a business."
                </p>
                <p>
                    "This passion led me to pursue a Master's in Business Analytics at University College Dublin. Today, I bridge the gap between technical data science and strategic business objectives. My goal is always the same: "
                    <strong>"to use data to tell a story and drive intelligent action."</strong>
                </p>
            </AnimatedSection>
        </section>
    }
}

#[component]
pub fn WorkExperience(experiences: Vec<WorkExperienceEntry>) -> impl IntoView {
    view! {
        <section id=Section::Experience.id()>
            <h2>{Section::Experience.title()}</h2>
            <div class="timeline-container">
                <For
                    each=move || experiences.clone().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=|(index, exp)| {
                        let side = TimelineSide::for_index(index);
                        view! {
                            <div class=side.class()>
                                <AnimatedSection animation=side.animation()>
                                    <div class="timeline-content">
                                        <h3>{exp.title}</h3>
                                        <div class="card-subtitle">
                                            {format!("{} | {}", exp.company, exp.duration)}
                                        </div>
                                        <p>{exp.description}</p>
                                        <Tags tags=exp.tags />
                                    </div>
                                </AnimatedSection>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}

#[component]
pub fn Projects(projects: Vec<ProjectEntry>, all_projects_link: String) -> impl IntoView {
    view! {
        <section id=Section::Projects.id()>
            <h2>{Section::Projects.title()}</h2>
            <div class="project-grid">
                <For
                    each=move || projects.clone().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=|(_, project)| view! { <ProjectCard project=project /> }
                />
            </div>
            <div class="other-projects-container">
                <AnimatedSection>
                    <a
                        href=all_projects_link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-solid"
                    >
                        "View All Projects"
                    </a>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: ProjectEntry) -> impl IntoView {
    let links = project.links();
    view! {
        <AnimatedSection>
            <div class="card">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <p>
                    <strong>"Result:"</strong>
                    " "
                    {project.outcome}
                </p>
                <div class="card-footer">
                    <Tags tags=project.tags />
                    <div class="project-links">
                        {links
                            .into_iter()
                            .map(|(kind, href)| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class=kind.class()
                                    >
                                        {kind.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </AnimatedSection>
    }
}

#[component]
pub fn Education(education: Vec<EducationEntry>) -> impl IntoView {
    view! {
        <section id=Section::Education.id()>
            <h2>{Section::Education.title()}</h2>
            <div class="education-grid">
                <For
                    each=move || education.clone().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=|(_, edu)| {
                        view! {
                            <AnimatedSection>
                                <div class="card education-card">
                                    <h3>{edu.institution}</h3>
                                    <p class="degree">{edu.degree}</p>
                                    <p class="secondary-text-color">{edu.duration}</p>
                                    <Tags tags=edu.modules />
                                </div>
                            </AnimatedSection>
                        }
                    }
                />
            </div>
        </section>
    }
}

#[component]
pub fn Skills(skills: Vec<SkillCategory>) -> impl IntoView {
    view! {
        <section id=Section::Skills.id()>
            <AnimatedSection>
                <h2>{Section::Skills.title()}</h2>
                <div class="skills-grid">
                    {skills
                        .into_iter()
                        .map(|category| {
                            view! {
                                <div class="skill-category">
                                    <h4>{category.title}</h4>
                                    <ul>
                                        {category
                                            .items
                                            .into_iter()
                                            .map(|skill| {
                                                view! {
                                                    <li>
                                                        {skill
                                                            .icon
                                                            .map(|icon| view! { <i class=icon></i> " " })}
                                                        {skill.label}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </AnimatedSection>
        </section>
    }
}

#[component]
pub fn Extracurricular(activities: Vec<ActivityEntry>) -> impl IntoView {
    view! {
        <section id=Section::Extracurricular.id()>
            <h2>{Section::Extracurricular.title()}</h2>
            <div class="extracurricular-grid">
                <For
                    each=move || activities.clone().into_iter().enumerate()
                    key=|(index, _)| *index
                    children=|(_, act)| {
                        view! {
                            <AnimatedSection>
                                <div class="card extracurricular-card">
                                    <h3>{act.role}</h3>
                                    <p>{act.description}</p>
                                </div>
                            </AnimatedSection>
                        }
                    }
                />
            </div>
        </section>
    }
}
