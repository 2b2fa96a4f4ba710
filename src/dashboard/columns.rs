// The columns of the survey export, in the order of the export.

/// (column key, question text as found in the header row)
///
/// Several country questions share the same text: they are mapped left to right.
pub const SURVEY_COLUMNS: [(&str, &str); 101] = [
    ("responseId", "Response ID"),
    ("dateSubmitted", "Date submitted"),
    ("lastPage", "Last page"),
    ("startLanguage", "Start language"),
    ("seed", "Seed"),
    ("ageGroup", "Which age group do you belong to?"),
    ("professionalExperienceYears", "How many years of professional experience do you have in IT/software engineering? "),
    ("continent", "Which continent do you live on? "),
    ("countryOfResidence", "What is your current country of residence? "),
    ("countryOfResidenceAlt1", "What is your current country of residence?"),
    ("countryOfResidenceAlt2", "What is your current country of residence?"),
    ("countryOfResidenceAlt3", "What is your current country of residence?"),
    ("countryOfResidenceAlt4", "What is your current country of residence?"),
    ("role", "Which of the following best describes your current role in the organization? "),
    ("roleOther", "Which of the following best describes your current role in the organization?  [Other]"),
    ("organizationType", "Which of the following organizational types best describes your organization? "),
    ("primaryApplicationDomain", "In which application domain do you currently primarily work? "),
    ("primaryApplicationDomainOther", "In which application domain do you currently primarily work?  [Other]"),
    ("heardOfDigitalSustainabilityDefinition", "We consider Digital Sustainability an umbrella term for two aspects: Sustainable Software and Sustainable by Software.  Sustainable Software concerns the sustainability of digital solutions in terms of their impact on environmental, economic, technical, social, and individual dimensions, including carbon footprint (Green IT) and process resources.  Sustainable by Software describes digital solutions designed to achieve positive sustainability impacts to help individuals and organizations reach sustainability goals, such as such as the United Nations Sustainable Development Goals (SDGs) more effectively.  Have you heard of this or a similar definition of digital sustainability before?  "),
    ("discussionFrequency", "How frequently do you encounter (e.g., coming across or taking part in) discussions about digital sustainability in your professional environment?  "),
    ("discussionFrequencyOther", "How frequently do you encounter (e.g., coming across or taking part in) discussions about digital sustainability in your professional environment?   [Other]"),
    ("participatedInTraining", "Have you participated in one or more training or educational programs on digital sustainability? "),
    ("trainingNotAware", "What are the reasons you haven’t participated in a training or educational program on digital sustainability before?  [I was not aware such programs existed]"),
    ("trainingNoOrganizationOffer", "What are the reasons you haven’t participated in a training or educational program on digital sustainability before?  [My organization does not offer such programs]"),
    ("trainingNoOpportunity", "What are the reasons you haven’t participated in a training or educational program on digital sustainability before?  [I have not had the opportunity to attend]"),
    ("trainingNoNeed", "What are the reasons you haven’t participated in a training or educational program on digital sustainability before?  [I don’t see the need for such training]"),
    ("trainingTooExpensive", "What are the reasons you haven’t participated in a training or educational program on digital sustainability before?  [The cost is too high]"),
    ("trainingOtherReason", "What are the reasons you haven’t participated in a training or educational program on digital sustainability before?  [Other]"),
    ("trainingCount", "How many times training(s) or educational program(s) on digital sustainability did you participate in?  "),
    ("trainingPrivateCapacity", "Did you participate in the training(s) or educational program(s) in your private capacity (i.e., you paid for it and participated out of personal interest)? "),
    ("trainingDescription", "Please tell us a little about the training or educational programs on digital sustainability you participated in. "),
    ("trainingSatisfaction", "Are you satisfied with the number of trainings or educational programs you participated in?  "),
    ("notMoreTrainingNotAware", "What are the reasons you haven’t participated in more training or educational programs on digital sustainability?   [ I was not aware such programs existed]"),
    ("notMoreTrainingNoOrganization", "What are the reasons you haven’t participated in more training or educational programs on digital sustainability?   [My organization does not offer such programs]"),
    ("notMoreTrainingNoOpportunity", "What are the reasons you haven’t participated in more training or educational programs on digital sustainability?   [I have not had the opportunity to attend]"),
    ("notMoreTrainingNoNeed", "What are the reasons you haven’t participated in more training or educational programs on digital sustainability?   [I don’t see the need for such training]"),
    ("notMoreTrainingTooExpensive", "What are the reasons you haven’t participated in more training or educational programs on digital sustainability?   [The cost is too high]"),
    ("notMoreTrainingOther", "What are the reasons you haven’t participated in more training or educational programs on digital sustainability?   [Other]"),
    ("organizationHasDigitalSustainabilityGoals", "Does your organization have specific digital sustainability goals or benchmarks for software development projects? "),
    ("organizationHasSustainabilityTeam", "Does your organization have a dedicated sustainability or Corporate Social Responsibility (CSR) expert, team or department? "),
    ("organizationIncorporatesSustainablePractices", "Does your organization incorporate sustainable development practices? "),
    ("organizationDepartmentCoordination", "Do different departments in your organization coordinate on sustainability for software development projects? "),
    ("considerEnvironmental", "Which dimensions of sustainability are actively considered in your organization's software development projects?  [Environmental sustainability (e.g., resource efficiency of energy/water/..., carbon footprint)]"),
    ("considerSocial", "Which dimensions of sustainability are actively considered in your organization's software development projects?  [Social sustainability (e.g., role of community, shared values, working conditions, and well-being)]"),
    ("considerIndividual", "Which dimensions of sustainability are actively considered in your organization's software development projects?  [Individual sustainability (e.g., health, competence, access to services)]"),
    ("considerEconomic", "Which dimensions of sustainability are actively considered in your organization's software development projects?  [Economic sustainability (e.g., cost efficiency, economic viability)]"),
    ("considerTechnical", "Which dimensions of sustainability are actively considered in your organization's software development projects?  [Technical sustainability (e.g., maintainability, scalability)]"),
    ("considerOther", "Which dimensions of sustainability are actively considered in your organization's software development projects?  [Other]"),
    ("organizationReportsOnSustainability", "Does your organization report on sustainability practices?  "),
    ("organizationOffersTraining", "Does your organization offer training or resources to employees on sustainable software development practices? "),
    ("organizationTrainingDescription", "Can you tell us a little about the training or resources your organization offers?  "),
    ("orgNoTrainingLackAwareness", "What might be the reasons your organization does not offer any or more training or resources on the design or development of sustainable digital solutions?  [Lack of awareness about the availability of such training]"),
    ("orgNoTrainingLackUnderstanding", "What might be the reasons your organization does not offer any or more training or resources on the design or development of sustainable digital solutions?  [Lack of understanding about the need for such training]"),
    ("orgNoTrainingNoDemand", "What might be the reasons your organization does not offer any or more training or resources on the design or development of sustainable digital solutions?  [No demand or interest from employees]"),
    ("orgNoTrainingLimitedBudget", "What might be the reasons your organization does not offer any or more training or resources on the design or development of sustainable digital solutions?  [Limited budget or resources for training programs]"),
    ("orgNoTrainingNotPriority", "What might be the reasons your organization does not offer any or more training or resources on the design or development of sustainable digital solutions?  [Sustainability is (perhaps) not a priority for the organization]"),
    ("orgNoTrainingNotSure", "What might be the reasons your organization does not offer any or more training or resources on the design or development of sustainable digital solutions?  [Not sure]"),
    ("orgNoTrainingOther", "What might be the reasons your organization does not offer any or more training or resources on the design or development of sustainable digital solutions?  [Other]"),
    ("customerRequirementFrequency", "How often is the sustainability of your digital solutions an explicit requirement of the customer or the users? "),
    ("customerNotRequestingReasons", "Why do you think that your customers and users have not asked explicitly to build sustainable digital solutions? "),
    ("personIncorporatesSustainability", "Do you incorporate digital sustainability considerations in your role-specific tasks?  "),
    ("driveOrganizationalPolicies", "What drives you to incorporate digital sustainability in your role-related tasks?  [Organizational policies ]"),
    ("drivePersonalBeliefs", "What drives you to incorporate digital sustainability in your role-related tasks?  [Personal beliefs ]"),
    ("driveClientRequirements", "What drives you to incorporate digital sustainability in your role-related tasks?  [Client requirements ]"),
    ("driveUserRequirements", "What drives you to incorporate digital sustainability in your role-related tasks?  [User requirements]"),
    ("driveLegalRequirements", "What drives you to incorporate digital sustainability in your role-related tasks?  [Legal requirements ]"),
    ("driveOther", "What drives you to incorporate digital sustainability in your role-related tasks?  [Other]"),
    ("roleConsiderEnvironmental", "Which sustainability dimensions do you consider in your role-specific tasks?   [Environmental sustainability (e.g., resource efficiency of energy/water/…, carbon footprint)]"),
    ("roleConsiderSocial", "Which sustainability dimensions do you consider in your role-specific tasks?   [Social sustainability (e.g., the role of community, shared values, working conditions, and well-being)  ]"),
    ("roleConsiderIndividual", "Which sustainability dimensions do you consider in your role-specific tasks?   [Individual sustainability (e.g., health, competence, access to services)]"),
    ("roleConsiderEconomic", "Which sustainability dimensions do you consider in your role-specific tasks?   [Economic sustainability (e.g., cost efficiency, economic viability)]"),
    ("roleConsiderTechnical", "Which sustainability dimensions do you consider in your role-specific tasks?   [Technical sustainability (e.g., maintainability, scalability)]"),
    ("roleConsiderOther", "Which sustainability dimensions do you consider in your role-specific tasks?   [Other]"),
    ("usesTools", "Are there specific tools, software, or frameworks that help you incorporate sustainability into your tasks? (E.g., gathering and managing requirements, writing sustainability-focused tests, optimizing code for less energy consumption.) "),
    ("toolsDescription", "Can you name the tools, software, and/or frameworks, and tell us how and for what you use them?  "),
    ("hindranceLackInterest", "What hinders you from incorporating sustainability in your role-specific tasks?   [Lack of personal interest (e.g., no incentive to make the effort to consider sustainability)]"),
    ("hindranceLackKnowledge", "What hinders you from incorporating sustainability in your role-specific tasks?   [Lack of knowledge or awareness (e.g., not knowing enough about sustainability impact or best practices)]"),
    ("hindranceLimitedResources", "What hinders you from incorporating sustainability in your role-specific tasks?   [Limited resources or budget (e.g., financial constraints, insufficient tools or technology)]"),
    ("hindranceFinancialConstraints", "What hinders you from incorporating sustainability in your role-specific tasks?   [Financial constraints (e.g., limited budget)]"),
    ("hindranceInsufficientTime", "What hinders you from incorporating sustainability in your role-specific tasks?   [Insufficient time or competing priorities (e.g., pressing deadlines, other projects taking precedence)]"),
    ("hindranceLackSupport", "What hinders you from incorporating sustainability in your role-specific tasks?   [Lack of organizational or leadership support (e.g., limited buy-in from management, inadequate policy frameworks)]"),
    ("hindranceComplexity", "What hinders you from incorporating sustainability in your role-specific tasks?   [Complexity or uncertainty of sustainability solutions (e.g., difficulty measuring impact or navigating standards)]"),
    ("hindranceCulturalBarriers", "What hinders you from incorporating sustainability in your role-specific tasks?   [Cultural or social barriers (e.g., resistance to change, misalignment with organizational culture)]"),
    ("hindranceStakeholderResistance", "What hinders you from incorporating sustainability in your role-specific tasks?   [Resistance from the stakeholders, such as clients and customers]"),
    ("hindranceOther", "What hinders you from incorporating sustainability in your role-specific tasks?   [Other]"),
    ("lackKnowledgeEnvironmental", "Which sustainability dimension(s) do you feel you lack sufficient knowledge or tools to effectively address?  [Environmental sustainability (e.g., resource efficiency of energy/water/…, carbon footprint)]"),
    ("lackKnowledgeSocial", "Which sustainability dimension(s) do you feel you lack sufficient knowledge or tools to effectively address?  [Social sustainability (e.g., role of community, shared values)]"),
    ("lackKnowledgeIndividual", "Which sustainability dimension(s) do you feel you lack sufficient knowledge or tools to effectively address?  [Individual sustainability (e.g., health, competence, access to services)]"),
    ("lackKnowledgeEconomic", "Which sustainability dimension(s) do you feel you lack sufficient knowledge or tools to effectively address?  [Economic sustainability (e.g., cost efficiency, economic viability)]"),
    ("lackKnowledgeTechnical", "Which sustainability dimension(s) do you feel you lack sufficient knowledge or tools to effectively address?  [Technical sustainability (e.g., maintainability, scalability)]"),
    ("lackKnowledgeNone", "Which sustainability dimension(s) do you feel you lack sufficient knowledge or tools to effectively address?  [I have sufficient knowledge and tools to effectively address all five sustainability dimensions]"),
    ("lackKnowledgeOther", "Which sustainability dimension(s) do you feel you lack sufficient knowledge or tools to effectively address?  [Other]"),
    ("supportNeedTheoretical", "What additional support or resources would help you integrate digital sustainability into your work?  [Theoretical knowledge (self-study learning material)]"),
    ("supportNeedTutorials", "What additional support or resources would help you integrate digital sustainability into your work?  [Tutorials (co-present or online training)]"),
    ("supportNeedCurricula", "What additional support or resources would help you integrate digital sustainability into your work?  [Curricula (educational programs)]"),
    ("supportNeedPractical", "What additional support or resources would help you integrate digital sustainability into your work?  [Practical knowledge (how-to's)]"),
    ("supportNeedCaseStudies", "What additional support or resources would help you integrate digital sustainability into your work?  [Positive case studies (real-world examples demonstrating benefits, including financial value)]"),
    ("supportNeedStructures", "What additional support or resources would help you integrate digital sustainability into your work?  [Structures (frameworks, definitions, standards)]"),
    ("supportNeedTools", "What additional support or resources would help you integrate digital sustainability into your work?  [Tools (assessment checklists, creativity methods)]"),
    ("supportNeedNone", "What additional support or resources would help you integrate digital sustainability into your work?  [I do not want to integrate more digital sustainability into my work]"),
    ("supportNeedOther", "What additional support or resources would help you integrate digital sustainability into your work?  [Other]"),
];
