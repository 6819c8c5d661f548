//! Doctor directory page for the browser, built on Yew.

#[cfg(target_arch = "wasm32")]
mod fetch;
#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use std::rc::Rc;
    use std::sync::Arc;

    use crate::fetch::BrowserSource;
    use crate::styles;
    use directory_core::presentation::{
        experience_label, fee_label, initial, results_heading, specialty_line,
        EMPTY_RESULTS_MESSAGE, LOADING_MESSAGE, LOAD_FAILED_NOTICE, SEARCH_PLACEHOLDER,
    };
    use directory_core::{
        suggest, ConsultationMode, Criteria, DirectoryConfig, Doctor, NavigationMode, SortKey,
        ViewAction, ViewState,
    };
    use directory_source::load_doctors;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{console, Document, Element, HtmlInputElement, Window};
    use yew::events::{Event, FocusEvent, InputEvent, MouseEvent, SubmitEvent};
    use yew::prelude::*;
    use yew::TargetCast;

    /// Yew adapter around the pure [`ViewState`] reducer.
    #[derive(Clone, PartialEq, Default)]
    struct DirectoryModel(ViewState);

    impl Reducible for DirectoryModel {
        type Action = ViewAction;

        fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
            Rc::new(DirectoryModel(self.0.clone().reduce(action)))
        }
    }

    #[derive(Clone, Copy, PartialEq)]
    enum PanelSection {
        Sort,
        Consultation,
        Specialties,
    }

    /// Which filter panel sections are open. Local UI state, never in the URL.
    #[derive(Clone, Copy, PartialEq)]
    struct PanelSections {
        sort: bool,
        consultation: bool,
        specialties: bool,
    }

    impl Default for PanelSections {
        fn default() -> Self {
            Self {
                sort: true,
                consultation: true,
                specialties: true,
            }
        }
    }

    impl PanelSections {
        fn is_open(self, section: PanelSection) -> bool {
            match section {
                PanelSection::Sort => self.sort,
                PanelSection::Consultation => self.consultation,
                PanelSection::Specialties => self.specialties,
            }
        }

        fn toggled(mut self, section: PanelSection) -> Self {
            match section {
                PanelSection::Sort => self.sort = !self.sort,
                PanelSection::Consultation => self.consultation = !self.consultation,
                PanelSection::Specialties => self.specialties = !self.specialties,
            }
            self
        }
    }

    #[derive(Properties, PartialEq)]
    pub struct DirectoryViewProps {
        pub config: DirectoryConfig,
    }

    #[function_component(DirectoryView)]
    fn directory_view(props: &DirectoryViewProps) -> Html {
        let state = use_reducer(|| DirectoryModel(ViewState::from_query(&current_search())));

        {
            let dispatcher = state.dispatcher();
            let endpoint = props.config.endpoint.clone();
            use_effect_with((), move |_| {
                if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                    if let Err(err) = styles::ensure_styles(&document) {
                        console::error_1(&err);
                    }
                }

                yew::platform::spawn_local(async move {
                    let loaded = load_doctors(&BrowserSource::new(endpoint)).await;
                    let notice = loaded.failure.map(|err| {
                        console::error_1(&JsValue::from_str(&format!(
                            "Error fetching doctors: {err}"
                        )));
                        LOAD_FAILED_NOTICE.to_string()
                    });
                    dispatcher.dispatch(ViewAction::Loaded {
                        doctors: loaded.doctors,
                        notice,
                    });
                });
                || ()
            });
        }

        {
            let dispatcher = state.dispatcher();
            use_effect_with((), move |_| {
                let listener = web_sys::window().map(|window| {
                    let on_pop = Closure::<dyn Fn()>::new(move || {
                        dispatcher.dispatch(ViewAction::UrlChanged(current_search()));
                    });
                    if let Err(err) = window
                        .add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref())
                    {
                        console::error_1(&err);
                    }
                    (window, on_pop)
                });

                move || {
                    if let Some((window, on_pop)) = listener {
                        if let Err(err) = window.remove_event_listener_with_callback(
                            "popstate",
                            on_pop.as_ref().unchecked_ref(),
                        ) {
                            console::error_1(&err);
                        }
                    }
                }
            });
        }

        {
            let view = state.0.clone();
            use_effect_with(
                (view.criteria.clone(), view.navigation),
                move |(_, navigation)| {
                    if let Some(mode) = navigation {
                        if let Err(err) = publish_criteria(&view, *mode) {
                            console::error_1(&err);
                        }
                    }
                    || ()
                },
            );
        }

        let view = &state.0;
        let on_action = {
            let state = state.clone();
            Callback::from(move |action: ViewAction| state.dispatch(action))
        };
        let on_search = {
            let state = state.clone();
            Callback::from(move |text: String| state.dispatch(ViewAction::SubmitSearch(text)))
        };

        html! {
            <div class="directory-root">
                <SearchHeader
                    doctors={view.doctors.clone()}
                    query={view.criteria.query.clone()}
                    suggestion_limit={props.config.suggestion_limit}
                    on_search={on_search}
                />
                { render_notice(view.notice.as_deref(), on_action.clone()) }
                <main class="directory-body">
                    {
                        if view.is_loading() {
                            html! { <p class="directory-status">{ LOADING_MESSAGE }</p> }
                        } else {
                            html! {
                                <div class="directory-grid">
                                    <FilterPanel
                                        specialties={view.specialties.clone()}
                                        criteria={view.criteria.clone()}
                                        on_action={on_action.clone()}
                                    />
                                    <DoctorList doctors={view.visible.clone()} />
                                </div>
                            }
                        }
                    }
                </main>
            </div>
        }
    }

    fn render_notice(notice: Option<&str>, on_action: Callback<ViewAction>) -> Html {
        let Some(message) = notice else {
            return Html::default();
        };
        let on_dismiss = Callback::from(move |_: MouseEvent| on_action.emit(ViewAction::DismissNotice));

        html! {
            <div class="directory-notice" role="alert">
                <span>{ message.to_string() }</span>
                <button type="button" onclick={on_dismiss} aria-label="Dismiss">{"×"}</button>
            </div>
        }
    }

    #[derive(Properties, PartialEq)]
    struct SearchHeaderProps {
        doctors: Arc<Vec<Doctor>>,
        query: String,
        suggestion_limit: usize,
        on_search: Callback<String>,
    }

    #[function_component(SearchHeader)]
    fn search_header(props: &SearchHeaderProps) -> Html {
        let draft = use_state(|| props.query.clone());
        let open = use_state(|| false);

        {
            let draft = draft.clone();
            use_effect_with(props.query.clone(), move |query| {
                draft.set(query.clone());
                || ()
            });
        }

        let suggestions = suggest(&props.doctors, &draft, props.suggestion_limit);

        let on_input = {
            let draft = draft.clone();
            let open = open.clone();
            Callback::from(move |event: InputEvent| {
                let input: HtmlInputElement = event.target_unchecked_into();
                let value = input.value();
                open.set(!value.trim().is_empty());
                draft.set(value);
            })
        };

        let on_focus = {
            let open = open.clone();
            let has_text = !draft.trim().is_empty();
            Callback::from(move |_: FocusEvent| open.set(has_text))
        };

        let on_blur = {
            let open = open.clone();
            Callback::from(move |_: FocusEvent| open.set(false))
        };

        let on_submit = {
            let draft = draft.clone();
            let open = open.clone();
            let on_search = props.on_search.clone();
            Callback::from(move |event: SubmitEvent| {
                event.prevent_default();
                open.set(false);
                on_search.emit((*draft).clone());
            })
        };

        html! {
            <header class="directory-header">
                <div class="search-box">
                    <form onsubmit={on_submit}>
                        <input
                            type="text"
                            data-testid="autocomplete-input"
                            placeholder={SEARCH_PLACEHOLDER}
                            value={(*draft).clone()}
                            oninput={on_input}
                            onfocus={on_focus}
                            onblur={on_blur}
                        />
                        <button type="submit" aria-label="Search">{"Search"}</button>
                    </form>
                    {
                        if *open && !suggestions.is_empty() {
                            html! {
                                <ul class="search-suggestions">
                                    {
                                        for suggestions.into_iter().map(|doctor| {
                                            let name = doctor.name.clone();
                                            let draft = draft.clone();
                                            let open = open.clone();
                                            let on_search = props.on_search.clone();
                                            // mousedown fires before the input loses focus.
                                            let onmousedown = Callback::from(move |event: MouseEvent| {
                                                event.prevent_default();
                                                open.set(false);
                                                draft.set(name.clone());
                                                on_search.emit(name.clone());
                                            });
                                            html! {
                                                <li
                                                    key={doctor.id.to_string()}
                                                    class="suggestion-item"
                                                    data-testid="suggestion-item"
                                                    onmousedown={onmousedown}
                                                >
                                                    <p class="suggestion-name">{ doctor.name.clone() }</p>
                                                    <p class="suggestion-detail">{ doctor.specialties.join(", ") }</p>
                                                </li>
                                            }
                                        })
                                    }
                                </ul>
                            }
                        } else {
                            Html::default()
                        }
                    }
                </div>
            </header>
        }
    }

    #[derive(Properties, PartialEq)]
    struct FilterPanelProps {
        specialties: Vec<String>,
        criteria: Criteria,
        on_action: Callback<ViewAction>,
    }

    #[function_component(FilterPanel)]
    fn filter_panel(props: &FilterPanelProps) -> Html {
        let sections = use_state(PanelSections::default);
        let criteria = &props.criteria;

        let header = |title: &str, test_id: &'static str, section: PanelSection| {
            let handle = sections.clone();
            let onclick = Callback::from(move |_: MouseEvent| handle.set(handle.toggled(section)));
            render_section_header(title, test_id, sections.is_open(section), onclick)
        };

        let on_clear = {
            let on_action = props.on_action.clone();
            Callback::from(move |_: MouseEvent| on_action.emit(ViewAction::ClearFilters))
        };

        let sort_options = [
            (SortKey::Fees, "sort-fees", "Price: Low-High"),
            (SortKey::Experience, "sort-experience", "Experience: Most Experience first"),
        ];
        let mode_options = [
            (ConsultationMode::VideoConsult, "filter-video-consult"),
            (ConsultationMode::InClinic, "filter-in-clinic"),
        ];

        html! {
            <aside class="filter-panel">
                <div class="filter-panel-header">
                    <h2>{"Filters"}</h2>
                    <button type="button" class="filter-clear" onclick={on_clear}>{"Clear All"}</button>
                </div>

                <section class="filter-section">
                    { header("Sort by", "filter-header-sort", PanelSection::Sort) }
                    {
                        if sections.sort {
                            html! {
                                <div class="filter-options">
                                    {
                                        for sort_options.into_iter().map(|(key, test_id, label)| {
                                            let on_action = props.on_action.clone();
                                            let onchange = Callback::from(move |_: Event| {
                                                on_action.emit(ViewAction::SetSort(Some(key)));
                                            });
                                            html! {
                                                <label class="filter-option">
                                                    <input
                                                        type="radio"
                                                        name="sort"
                                                        data-testid={test_id}
                                                        checked={criteria.sort_by == Some(key)}
                                                        onchange={onchange}
                                                    />
                                                    { label }
                                                </label>
                                            }
                                        })
                                    }
                                </div>
                            }
                        } else {
                            Html::default()
                        }
                    }
                </section>

                <section class="filter-section">
                    { header("Mode of consultation", "filter-header-moc", PanelSection::Consultation) }
                    {
                        if sections.consultation {
                            html! {
                                <div class="filter-options">
                                    {
                                        for mode_options.into_iter().map(|(mode, test_id)| {
                                            let on_action = props.on_action.clone();
                                            let onchange = Callback::from(move |_: Event| {
                                                on_action.emit(ViewAction::SelectConsultationMode(mode));
                                            });
                                            html! {
                                                <label class="filter-option">
                                                    <input
                                                        type="radio"
                                                        name="consultationType"
                                                        data-testid={test_id}
                                                        checked={criteria.consultation_types.contains(&mode)}
                                                        onchange={onchange}
                                                    />
                                                    { mode.label() }
                                                </label>
                                            }
                                        })
                                    }
                                </div>
                            }
                        } else {
                            Html::default()
                        }
                    }
                </section>

                <section class="filter-section">
                    { header("Specialties", "filter-header-speciality", PanelSection::Specialties) }
                    {
                        if sections.specialties {
                            html! {
                                <div class="filter-options filter-options-scroll">
                                    {
                                        for props.specialties.iter().map(|specialty| {
                                            let on_action = props.on_action.clone();
                                            let value = specialty.clone();
                                            let onchange = Callback::from(move |_: Event| {
                                                on_action.emit(ViewAction::ToggleSpecialty(value.clone()));
                                            });
                                            html! {
                                                <label key={specialty.clone()} class="filter-option">
                                                    <input
                                                        type="checkbox"
                                                        data-testid={format!("filter-specialty-{specialty}")}
                                                        checked={criteria.specialties.contains(specialty)}
                                                        onchange={onchange}
                                                    />
                                                    { specialty.clone() }
                                                </label>
                                            }
                                        })
                                    }
                                </div>
                            }
                        } else {
                            Html::default()
                        }
                    }
                </section>
            </aside>
        }
    }

    fn render_section_header(
        title: &str,
        test_id: &'static str,
        expanded: bool,
        onclick: Callback<MouseEvent>,
    ) -> Html {
        html! {
            <button
                type="button"
                class="filter-section-header"
                data-testid={test_id}
                aria-expanded={expanded.to_string()}
                onclick={onclick}
            >
                <h3>{ title.to_string() }</h3>
                <span class="filter-chevron">{ if expanded { "▴" } else { "▾" } }</span>
            </button>
        }
    }

    #[derive(Properties, PartialEq)]
    struct DoctorListProps {
        doctors: Vec<Doctor>,
    }

    #[function_component(DoctorList)]
    fn doctor_list(props: &DoctorListProps) -> Html {
        html! {
            <section class="doctor-list" aria-live="polite">
                <h2 class="doctor-list-heading">{ results_heading(props.doctors.len()) }</h2>
                {
                    if props.doctors.is_empty() {
                        html! { <p class="doctor-list-empty">{ EMPTY_RESULTS_MESSAGE }</p> }
                    } else {
                        html! { for props.doctors.iter().map(render_doctor_card) }
                    }
                }
            </section>
        }
    }

    fn render_doctor_card(doctor: &Doctor) -> Html {
        let avatar = match &doctor.image {
            Some(src) => html! { <img src={src.clone()} alt={doctor.name.clone()} /> },
            None => html! { <span class="doctor-initial">{ initial(doctor) }</span> },
        };

        html! {
            <article key={doctor.id.to_string()} class="doctor-card" data-testid="doctor-card">
                <div class="doctor-avatar">{ avatar }</div>
                <div class="doctor-body">
                    <h3 data-testid="doctor-name">{ doctor.name.clone() }</h3>
                    <p class="doctor-muted" data-testid="doctor-specialty">{ specialty_line(doctor) }</p>
                    <p class="doctor-muted" data-testid="doctor-experience">{ experience_label(doctor) }</p>
                    { doctor.clinic.as_ref().map(|clinic| html! { <p class="doctor-clinic">{ clinic.clone() }</p> }).unwrap_or_default() }
                    { doctor.location.as_ref().map(|location| html! { <p class="doctor-location">{ location.clone() }</p> }).unwrap_or_default() }
                </div>
                <div class="doctor-actions">
                    <p class="doctor-fee" data-testid="doctor-fee">{ fee_label(doctor) }</p>
                    <button type="button" class="doctor-book">{"Book Appointment"}</button>
                </div>
            </article>
        }
    }

    fn current_search() -> String {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default()
    }

    fn publish_criteria(view: &ViewState, mode: NavigationMode) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let location = window.location();
        let query = view.location_query(&location.search()?);

        let mut url = location.pathname()?;
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        url.push_str(&location.hash()?);

        let history = window.history()?;
        match mode {
            NavigationMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(&url)),
            NavigationMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(&url)),
        }
    }

    #[wasm_bindgen]
    pub fn mount_directory_view(selector: &str, endpoint: Option<String>) -> Result<(), JsValue> {
        let window: Window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Document is not accessible"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Invalid selector: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("No element matches the selector"))?;

        let mut config = DirectoryConfig::default();
        if let Some(endpoint) = endpoint {
            config.endpoint = endpoint;
        }

        yew::Renderer::<DirectoryView>::with_root_and_props(target, DirectoryViewProps { config })
            .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_directory_view;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_directory_view(
    _: &str,
    _: Option<String>,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "directory-ui only supports the wasm32 target",
    ))
}
