//! The static tables everything else is generated from.
//!
//! Each table is handed to a callback macro, which is how both the
//! metadata statics in this crate (see `meta.rs`) and the constructor
//! functions in the `shtml` crate are derived from the same list:
//!
//! ```ignore
//! macro_rules! my_callback {
//!     ($( $f:ident $konst:ident $tag:literal $kind:ident $slot:ident
//!         $category:ident $description:literal; )*) => { ... }
//! }
//! shtml_html::with_elements!(my_callback);
//! ```
//!
//! `html`, `head`, `body` and `meta` are not in the element table;
//! they have dedicated definitions.

/// Elements: `fn_name CONST "tag" TagKind Slot Category "description";`
#[macro_export]
macro_rules! with_elements {
    ($callback:ident) => {
        $callback! {
            // Basic HTML
            title TITLE "title" Block Any BasicHtml "Defines a title for the document";
            h1 H1 "h1" Block Body BasicHtml "Defines a level 1 heading";
            h2 H2 "h2" Block Body BasicHtml "Defines a level 2 heading";
            h3 H3 "h3" Block Body BasicHtml "Defines a level 3 heading";
            h4 H4 "h4" Block Body BasicHtml "Defines a level 4 heading";
            h5 H5 "h5" Block Body BasicHtml "Defines a level 5 heading";
            h6 H6 "h6" Block Body BasicHtml "Defines a level 6 heading";
            p P "p" Block Body BasicHtml "Defines a paragraph";
            br BR "br" Inline Body BasicHtml "Inserts a single line break";
            hr HR "hr" Inline Body BasicHtml "Defines a thematic change in the content";

            // Formatting
            acronym ACRONYM "acronym" Block Body Formatting "Defines an acronym (not supported in HTML5, use abbr)";
            abbr ABBR "abbr" Block Body Formatting "Defines an abbreviation or an acronym";
            address ADDRESS "address" Block Body Formatting "Defines contact information for the author/owner of a document";
            b B "b" Block Body Formatting "Defines bold text";
            bdi BDI "bdi" Block Body Formatting "Isolates a part of text that might be formatted in a different direction";
            bdo BDO "bdo" Block Body Formatting "Overrides the current text direction";
            big BIG "big" Block Body Formatting "Defines big text (not supported in HTML5, use CSS)";
            blockquote BLOCKQUOTE "blockquote" Block Body Formatting "Defines a section that is quoted from another source";
            center CENTER "center" Block Body Formatting "Defines centered text (not supported in HTML5, use CSS)";
            cite CITE "cite" Block Body Formatting "Defines the title of a work";
            code CODE "code" Block Body Formatting "Defines a piece of computer code";
            del DEL "del" Block Body Formatting "Defines text that has been deleted from a document";
            dfn DFN "dfn" Block Body Formatting "Specifies a term that is going to be defined within the content";
            em EM "em" Block Body Formatting "Defines emphasized text";
            font FONT "font" Block Body Formatting "Defines font, color, and size for text (not supported in HTML5, use CSS)";
            i I "i" Block Body Formatting "Defines a part of text in an alternate voice or mood";
            ins INS "ins" Block Body Formatting "Defines a text that has been inserted into a document";
            kbd KBD "kbd" Block Body Formatting "Defines keyboard input";
            mark MARK "mark" Block Body Formatting "Defines marked/highlighted text";
            meter METER "meter" Block Body Formatting "Defines a scalar measurement within a known range (a gauge)";
            pre PRE "pre" Block Body Formatting "Defines preformatted text";
            progress PROGRESS "progress" Block Body Formatting "Represents the progress of a task";
            q Q "q" Block Body Formatting "Defines a short quotation";
            rp RP "rp" Block Body Formatting "Defines what to show in browsers that do not support ruby annotations";
            rt RT "rt" Block Body Formatting "Defines an explanation/pronunciation of characters (for East Asian typography)";
            ruby RUBY "ruby" Block Body Formatting "Defines a ruby annotation (for East Asian typography)";
            s S "s" Block Body Formatting "Defines text that is no longer correct";
            samp SAMP "samp" Block Body Formatting "Defines sample output from a computer program";
            small SMALL "small" Block Body Formatting "Defines smaller text";
            strike STRIKE "strike" Block Body Formatting "Defines strikethrough text (not supported in HTML5, use del or s)";
            strong STRONG "strong" Block Body Formatting "Defines important text";
            sub SUB "sub" Block Body Formatting "Defines subscripted text";
            sup SUP "sup" Block Body Formatting "Defines superscripted text";
            template TEMPLATE "template" Block Any Formatting "Defines a container for content that should be hidden when the page loads";
            time TIME "time" Block Body Formatting "Defines a specific time (or datetime)";
            tt TT "tt" Block Body Formatting "Defines teletype text (not supported in HTML5, use CSS)";
            u U "u" Block Body Formatting "Defines some text that is unarticulated and styled differently from normal text";
            var VAR "var" Block Body Formatting "Defines a variable";
            wbr WBR "wbr" Inline Body Formatting "Defines a possible line-break";

            // Forms and Input
            form FORM "form" Block Body Forms "Defines an HTML form for user input";
            input INPUT "input" Inline Body Forms "Defines an input control";
            textarea TEXTAREA "textarea" Block Body Forms "Defines a multiline input control (text area)";
            button BUTTON "button" Block Body Forms "Defines a clickable button";
            select SELECT "select" Block Body Forms "Defines a drop-down list";
            optgroup OPTGROUP "optgroup" Block Body Forms "Defines a group of related options in a drop-down list";
            option OPTION "option" Block Body Forms "Defines an option in a drop-down list";
            label LABEL "label" Block Body Forms "Defines a label for an input element";
            fieldset FIELDSET "fieldset" Block Body Forms "Groups related elements in a form";
            legend LEGEND "legend" Block Body Forms "Defines a caption for a fieldset element";
            datalist DATALIST "datalist" Block Body Forms "Specifies a list of pre-defined options for input controls";
            output OUTPUT "output" Block Body Forms "Defines the result of a calculation";

            // Frames
            frame FRAME "frame" Inline Body Frames "Defines a window (a frame) in a frameset (not supported in HTML5)";
            frameset FRAMESET "frameset" Block Body Frames "Defines a set of frames (not supported in HTML5)";
            noframes NOFRAMES "noframes" Block Body Frames "Defines alternate content for users that do not support frames (not supported in HTML5)";
            iframe IFRAME "iframe" Block Body Frames "Defines an inline frame";

            // Images
            img IMG "img" Inline Body Images "Defines an image";
            map MAP "map" Block Body Images "Defines a client-side image map";
            area AREA "area" Inline Body Images "Defines an area inside an image map";
            canvas CANVAS "canvas" Block Body Images "Used to draw graphics, on the fly, via scripting";
            figcaption FIGCAPTION "figcaption" Block Body Images "Defines a caption for a figure element";
            figure FIGURE "figure" Block Body Images "Specifies self-contained content";
            picture PICTURE "picture" Block Body Images "Defines a container for multiple image resources";
            svg SVG "svg" Block Body Images "Defines a container for SVG graphics";

            // Audio / Video
            audio AUDIO "audio" Block Body AudioVideo "Defines sound content";
            source SOURCE "source" Inline Body AudioVideo "Defines multiple media resources for media elements";
            track TRACK "track" Inline Body AudioVideo "Defines text tracks for media elements";
            video VIDEO "video" Block Body AudioVideo "Defines a video or movie";

            // Links
            a A "a" Block Body Links "Defines a hyperlink";
            link LINK "link" Inline Any Links "Defines the relationship between a document and an external resource";
            nav NAV "nav" Block Body Links "Defines navigation links";

            // Lists
            menu MENU "menu" Block Body Lists "Defines an alternative unordered list";
            ul UL "ul" Block Body Lists "Defines an unordered list";
            ol OL "ol" Block Body Lists "Defines an ordered list";
            li LI "li" Block Body Lists "Defines a list item";
            dir DIR "dir" Block Body Lists "Defines a directory list (not supported in HTML5, use ul)";
            dl DL "dl" Block Body Lists "Defines a description list";
            dt DT "dt" Block Body Lists "Defines a term/name in a description list";
            dd DD "dd" Block Body Lists "Defines a description of a term/name in a description list";

            // Tables
            table TABLE "table" Block Body Tables "Defines a table";
            caption CAPTION "caption" Block Body Tables "Defines a table caption";
            th TH "th" Block Body Tables "Defines a header cell in a table";
            tr TR "tr" Block Body Tables "Defines a row in a table";
            td TD "td" Block Body Tables "Defines a cell in a table";
            thead THEAD "thead" Block Body Tables "Groups the header content in a table";
            tbody TBODY "tbody" Block Body Tables "Groups the body content in a table";
            tfoot TFOOT "tfoot" Block Body Tables "Groups the footer content in a table";
            col COL "col" Inline Body Tables "Specifies column properties for each column within a colgroup element";
            colgroup COLGROUP "colgroup" Block Body Tables "Specifies a group of one or more columns in a table for formatting";

            // Styles and Semantics
            style STYLE "style" Block Any Styles "Defines style information for a document";
            div DIV "div" Block Body Styles "Defines a section in a document";
            span SPAN "span" Block Body Styles "Defines a section in a document";
            header HEADER "header" Block Body Styles "Defines a header for a document or section";
            hgroup HGROUP "hgroup" Block Body Styles "Defines a header and related content";
            footer FOOTER "footer" Block Body Styles "Defines a footer for a document or section";
            main MAIN "main" Block Body Styles "Specifies the main content of a document";
            section SECTION "section" Block Body Styles "Defines a section in a document";
            search SEARCH "search" Block Body Styles "Defines a search section";
            article ARTICLE "article" Block Body Styles "Defines an article";
            aside ASIDE "aside" Block Body Styles "Defines content aside from the page content";
            details DETAILS "details" Block Body Styles "Defines additional details that the user can view or hide";
            dialog DIALOG "dialog" Block Body Styles "Defines a dialog box or window";
            summary SUMMARY "summary" Block Body Styles "Defines a visible heading for a details element";
            data DATA "data" Block Body Styles "Adds a machine-readable translation of a given content";

            // Meta Info
            base BASE "base" Inline Any MetaInfo "Specifies the base URL/target for all relative URLs in a document";
            basefont BASEFONT "basefont" Block Body MetaInfo "Specifies a default color, size, and font for all text in a document (not supported in HTML5)";

            // Programming
            script SCRIPT "script" Block Any Programming "Defines a client-side script";
            noscript NOSCRIPT "noscript" Block Any Programming "Defines an alternate content for users that do not support client-side scripts";
            applet APPLET "applet" Block Body Programming "Defines an embedded applet (not supported in HTML5, use embed or object)";
            embed EMBED "embed" Inline Body Programming "Defines a container for an external (non-HTML) application";
            object OBJECT "object" Block Body Programming "Defines an embedded object";
            param PARAM "param" Inline Body Programming "Defines a parameter for an object";
        }
    };
}

/// Attributes: `fn_name "attribute-name" AttributeFamily "applies to";`
#[macro_export]
macro_rules! with_attributes {
    ($callback:ident) => {
        $callback! {
            accept "accept" Standard "<input> (type=\"file\")";
            accept_charset "accept-charset" Standard "<form>";
            accesskey "accesskey" Standard "global";
            action "action" Standard "<form>";
            align "align" Standard "not supported in HTML5";
            alt "alt" Standard "<area>, <img>, <input>";
            r#async "async" Standard "<script>";
            autocomplete "autocomplete" Standard "<form>, <input>";
            autofocus "autofocus" Standard "<button>, <input>, <select>, <textarea>";
            autoplay "autoplay" Standard "<audio>, <video>";
            bgcolor "bgcolor" Standard "not supported in HTML5";
            border "border" Standard "not supported in HTML5";
            charset "charset" Standard "<meta>, <script>";
            checked "checked" Standard "<input> (type=\"checkbox\" or type=\"radio\")";
            cite "cite" Standard "<blockquote>, <del>, <ins>, <q>";
            class "class" Standard "global";
            color "color" Standard "not supported in HTML5";
            cols "cols" Standard "<textarea>";
            colspan "colspan" Standard "<td>, <th>";
            content "content" Standard "<meta>";
            contenteditable "contenteditable" Standard "global";
            controls "controls" Standard "<audio>, <video>";
            coords "coords" Standard "<area>";
            data "data" Standard "<object>";
            datetime "datetime" Standard "<del>, <ins>, <time>";
            default "default" Standard "<track>";
            defer "defer" Standard "<script>";
            dir "dir" Standard "global";
            dirname "dirname" Standard "<input>, <textarea>";
            disabled "disabled" Standard "<button>, <fieldset>, <input>, <optgroup>, <option>, <select>, <textarea>";
            download "download" Standard "<a>, <area>";
            draggable "draggable" Standard "global";
            enctype "enctype" Standard "<form>";
            enterkeyhint "enterkeyhint" Standard "global";
            r#for "for" Standard "<label>, <output>";
            form "form" Standard "<button>, <fieldset>, <input>, <label>, <meter>, <object>, <output>, <select>, <textarea>";
            formaction "formaction" Standard "<button>, <input>";
            headers "headers" Standard "<td>, <th>";
            height "height" Standard "<canvas>, <embed>, <iframe>, <img>, <input>, <object>, <video>";
            hidden "hidden" Standard "global";
            high "high" Standard "<meter>";
            href "href" Standard "<a>, <area>, <base>, <link>";
            hreflang "hreflang" Standard "<a>, <area>, <link>";
            http_equiv "http-equiv" Standard "<meta>";
            id "id" Standard "global";
            inert "inert" Standard "global";
            inputmode "inputmode" Standard "global";
            ismap "ismap" Standard "<img>";
            kind "kind" Standard "<track>";
            label "label" Standard "<track>, <option>, <optgroup>";
            lang "lang" Standard "global";
            list "list" Standard "<input>";
            r#loop "loop" Standard "<audio>, <video>";
            low "low" Standard "<meter>";
            max "max" Standard "<input>, <meter>, <progress>";
            maxlength "maxlength" Standard "<input>, <textarea>";
            media "media" Standard "<a>, <area>, <link>, <source>, <style>";
            method "method" Standard "<form>";
            min "min" Standard "<input>, <meter>";
            multiple "multiple" Standard "<input>, <select>";
            muted "muted" Standard "<video>, <audio>";
            name "name" Standard "<button>, <fieldset>, <form>, <iframe>, <input>, <map>, <meta>, <object>, <output>, <param>, <select>, <textarea>";
            novalidate "novalidate" Standard "<form>";
            open "open" Standard "<details>";
            optimum "optimum" Standard "<meter>";
            pattern "pattern" Standard "<input>";
            placeholder "placeholder" Standard "<input>, <textarea>";
            popover "popover" Standard "global";
            popovertarget "popovertarget" Standard "<button>, <input>";
            popovertargetaction "popovertargetaction" Standard "<button>, <input>";
            poster "poster" Standard "<video>";
            preload "preload" Standard "<audio>, <video>";
            readonly "readonly" Standard "<input>, <textarea>";
            rel "rel" Standard "<a>, <area>, <form>, <link>";
            required "required" Standard "<input>, <select>, <textarea>";
            reversed "reversed" Standard "<ol>";
            rows "rows" Standard "<textarea>";
            rowspan "rowspan" Standard "<td>, <th>";
            sandbox "sandbox" Standard "<iframe>";
            scope "scope" Standard "<th>";
            selected "selected" Standard "<option>";
            shape "shape" Standard "<area>";
            size "size" Standard "<input>, <select>";
            sizes "sizes" Standard "<img>, <link>, <source>";
            span "span" Standard "<col>, <colgroup>";
            spellcheck "spellcheck" Standard "global";
            src "src" Standard "<audio>, <embed>, <iframe>, <img>, <input>, <script>, <source>, <track>, <video>";
            srcdoc "srcdoc" Standard "<iframe>";
            srclang "srclang" Standard "<track>";
            srcset "srcset" Standard "<img>, <source>";
            start "start" Standard "<ol>";
            step "step" Standard "<input>";
            style "style" Standard "global";
            tabindex "tabindex" Standard "global";
            target "target" Standard "<a>, <area>, <base>, <form>";
            title "title" Standard "global";
            translate "translate" Standard "global";
            r#type "type" Standard "<a>, <button>, <embed>, <input>, <link>, <menu>, <object>, <script>, <source>, <style>";
            usemap "usemap" Standard "<img>, <object>";
            value "value" Standard "<button>, <input>, <li>, <option>, <meter>, <progress>, <param>";
            width "width" Standard "<canvas>, <embed>, <iframe>, <img>, <input>, <object>, <video>";
            wrap "wrap" Standard "<textarea>";

            onabort "onabort" Event "<audio>, <embed>, <img>, <object>, <video>";
            onafterprint "onafterprint" Event "<body>";
            onbeforeprint "onbeforeprint" Event "<body>";
            onbeforeunload "onbeforeunload" Event "<body>";
            onblur "onblur" Event "visible elements";
            oncanplay "oncanplay" Event "<audio>, <embed>, <object>, <video>";
            oncanplaythrough "oncanplaythrough" Event "<audio>, <video>";
            onchange "onchange" Event "visible elements";
            onclick "onclick" Event "visible elements";
            oncontextmenu "oncontextmenu" Event "visible elements";
            oncopy "oncopy" Event "visible elements";
            oncuechange "oncuechange" Event "<track>";
            oncut "oncut" Event "visible elements";
            ondblclick "ondblclick" Event "visible elements";
            ondrag "ondrag" Event "visible elements";
            ondragend "ondragend" Event "visible elements";
            ondragenter "ondragenter" Event "visible elements";
            ondragleave "ondragleave" Event "visible elements";
            ondragover "ondragover" Event "visible elements";
            ondragstart "ondragstart" Event "visible elements";
            ondrop "ondrop" Event "visible elements";
            ondurationchange "ondurationchange" Event "<audio>, <video>";
            onemptied "onemptied" Event "<audio>, <video>";
            onended "onended" Event "<audio>, <video>";
            onerror "onerror" Event "<audio>, <body>, <embed>, <img>, <object>, <script>, <style>, <video>";
            onfocus "onfocus" Event "visible elements";
            onhashchange "onhashchange" Event "<body>";
            oninput "oninput" Event "visible elements";
            oninvalid "oninvalid" Event "visible elements";
            onkeydown "onkeydown" Event "visible elements";
            onkeypress "onkeypress" Event "visible elements";
            onkeyup "onkeyup" Event "visible elements";
            onload "onload" Event "<body>, <iframe>, <img>, <input>, <link>, <script>, <style>";
            onloadeddata "onloadeddata" Event "<audio>, <video>";
            onloadedmetadata "onloadedmetadata" Event "<audio>, <video>";
            onloadstart "onloadstart" Event "<audio>, <video>";
            onmousedown "onmousedown" Event "visible elements";
            onmousemove "onmousemove" Event "visible elements";
            onmouseout "onmouseout" Event "visible elements";
            onmouseover "onmouseover" Event "visible elements";
            onmouseup "onmouseup" Event "visible elements";
            onmousewheel "onmousewheel" Event "visible elements";
            onoffline "onoffline" Event "<body>";
            ononline "ononline" Event "<body>";
            onpagehide "onpagehide" Event "<body>";
            onpageshow "onpageshow" Event "<body>";
            onpaste "onpaste" Event "visible elements";
            onpause "onpause" Event "<audio>, <video>";
            onplay "onplay" Event "<audio>, <video>";
            onplaying "onplaying" Event "<audio>, <video>";
            onpopstate "onpopstate" Event "<body>";
            onprogress "onprogress" Event "<audio>, <video>";
            onratechange "onratechange" Event "<audio>, <video>";
            onreset "onreset" Event "<form>";
            onresize "onresize" Event "<body>";
            onscroll "onscroll" Event "visible elements";
            onsearch "onsearch" Event "<input>";
            onseeked "onseeked" Event "<audio>, <video>";
            onseeking "onseeking" Event "<audio>, <video>";
            onselect "onselect" Event "visible elements";
            onstalled "onstalled" Event "<audio>, <video>";
            onstorage "onstorage" Event "<body>";
            onsubmit "onsubmit" Event "<form>";
            onsuspend "onsuspend" Event "<audio>, <video>";
            ontimeupdate "ontimeupdate" Event "<audio>, <video>";
            ontoggle "ontoggle" Event "<details>";
            onunload "onunload" Event "<body>";
            onvolumechange "onvolumechange" Event "<audio>, <video>";
            onwaiting "onwaiting" Event "<audio>, <video>";
            onwheel "onwheel" Event "visible elements";
        }
    };
}

/// htmx attributes: `fn_name "hx-attribute";`
#[macro_export]
macro_rules! with_hx_attributes {
    ($callback:ident) => {
        $callback! {
            get "hx-get";
            post "hx-post";
            push_url "hx-push-url";
            select "hx-select";
            select_oob "hx-select-oob";
            swap "hx-swap";
            swap_oob "hx-swap-oob";
            target "hx-target";
            trigger "hx-trigger";
            vals "hx-vals";
            boost "hx-boost";
            confirm "hx-confirm";
            delete "hx-delete";
            disable "hx-disable";
            disabled_elt "hx-disabled-elt";
            disinherit "hx-disinherit";
            encoding "hx-encoding";
            ext "hx-ext";
            headers "hx-headers";
            history "hx-history";
            history_elt "hx-history-elt";
            include "hx-include";
            indicator "hx-indicator";
            inherit "hx-inherit";
            params "hx-params";
            patch "hx-patch";
            preserve "hx-preserve";
            prompt "hx-prompt";
            put "hx-put";
            replace_url "hx-replace-url";
            request "hx-request";
            sync "hx-sync";
            validate "hx-validate";
            vars "hx-vars";
        }
    };
}

/// CSS properties: `fn_name "property-name";`
#[macro_export]
macro_rules! with_css_properties {
    ($callback:ident) => {
        $callback! {
            accent_color "accent-color";
            align_content "align-content";
            align_items "align-items";
            align_self "align-self";
            all "all";
            animation "animation";
            animation_delay "animation-delay";
            animation_direction "animation-direction";
            animation_duration "animation-duration";
            animation_fill_mode "animation-fill-mode";
            animation_iteration_count "animation-iteration-count";
            animation_name "animation-name";
            animation_play_state "animation-play-state";
            animation_timing_function "animation-timing-function";
            aspect_ratio "aspect-ratio";
            backdrop_filter "backdrop-filter";
            backface_visibility "backface-visibility";
            background "background";
            background_attachment "background-attachment";
            background_blend_mode "background-blend-mode";
            background_clip "background-clip";
            background_color "background-color";
            background_image "background-image";
            background_origin "background-origin";
            background_position "background-position";
            background_position_x "background-position-x";
            background_position_y "background-position-y";
            background_repeat "background-repeat";
            background_size "background-size";
            block_size "block-size";
            border "border";
            border_block "border-block";
            border_block_color "border-block-color";
            border_block_end "border-block-end";
            border_block_end_color "border-block-end-color";
            border_block_end_style "border-block-end-style";
            border_block_end_width "border-block-end-width";
            border_block_start "border-block-start";
            border_block_start_color "border-block-start-color";
            border_block_start_style "border-block-start-style";
            border_block_start_width "border-block-start-width";
            border_block_style "border-block-style";
            border_block_width "border-block-width";
            border_bottom "border-bottom";
            border_bottom_color "border-bottom-color";
            border_bottom_left_radius "border-bottom-left-radius";
            border_bottom_right_radius "border-bottom-right-radius";
            border_bottom_style "border-bottom-style";
            border_bottom_width "border-bottom-width";
            border_collapse "border-collapse";
            border_color "border-color";
            border_end_end_radius "border-end-end-radius";
            border_end_start_radius "border-end-start-radius";
            border_image "border-image";
            border_image_outset "border-image-outset";
            border_image_repeat "border-image-repeat";
            border_image_slice "border-image-slice";
            border_image_source "border-image-source";
            border_image_width "border-image-width";
            border_inline "border-inline";
            border_inline_color "border-inline-color";
            border_inline_end "border-inline-end";
            border_inline_end_color "border-inline-end-color";
            border_inline_end_style "border-inline-end-style";
            border_inline_end_width "border-inline-end-width";
            border_inline_start "border-inline-start";
            border_inline_start_color "border-inline-start-color";
            border_inline_start_style "border-inline-start-style";
            border_inline_start_width "border-inline-start-width";
            border_inline_style "border-inline-style";
            border_inline_width "border-inline-width";
            border_left "border-left";
            border_left_color "border-left-color";
            border_left_style "border-left-style";
            border_left_width "border-left-width";
            border_radius "border-radius";
            border_right "border-right";
            border_right_color "border-right-color";
            border_right_style "border-right-style";
            border_right_width "border-right-width";
            border_spacing "border-spacing";
            border_start_end_radius "border-start-end-radius";
            border_start_start_radius "border-start-start-radius";
            border_style "border-style";
            border_top "border-top";
            border_top_color "border-top-color";
            border_top_left_radius "border-top-left-radius";
            border_top_right_radius "border-top-right-radius";
            border_top_style "border-top-style";
            border_top_width "border-top-width";
            border_width "border-width";
            bottom "bottom";
            box_decoration_break "box-decoration-break";
            box_reflect "box-reflect";
            box_shadow "box-shadow";
            box_sizing "box-sizing";
            break_after "break-after";
            break_before "break-before";
            break_inside "break-inside";
            caption_side "caption-side";
            caret_color "caret-color";
            clear "clear";
            clip "clip";
            clip_path "clip-path";
            color "color";
            column_count "column-count";
            column_fill "column-fill";
            column_gap "column-gap";
            column_rule "column-rule";
            column_rule_color "column-rule-color";
            column_rule_style "column-rule-style";
            column_rule_width "column-rule-width";
            column_span "column-span";
            column_width "column-width";
            columns "columns";
            content "content";
            counter_increment "counter-increment";
            counter_reset "counter-reset";
            counter_set "counter-set";
            cursor "cursor";
            direction "direction";
            display "display";
            empty_cells "empty-cells";
            filter "filter";
            flex "flex";
            flex_basis "flex-basis";
            flex_direction "flex-direction";
            flex_flow "flex-flow";
            flex_grow "flex-grow";
            flex_shrink "flex-shrink";
            flex_wrap "flex-wrap";
            font "font";
            font_family "font-family";
            font_feature_settings "font-feature-settings";
            font_kerning "font-kerning";
            font_language_override "font-language-override";
            font_size "font-size";
            font_size_adjust "font-size-adjust";
            font_stretch "font-stretch";
            font_style "font-style";
            font_synthesis "font-synthesis";
            font_variant "font-variant";
            font_variant_alternates "font-variant-alternates";
            font_variant_caps "font-variant-caps";
            font_variant_east_asian "font-variant-east-asian";
            font_variant_ligatures "font-variant-ligatures";
            font_variant_numeric "font-variant-numeric";
            font_variant_position "font-variant-position";
            font_weight "font-weight";
            gap "gap";
            grid "grid";
            grid_area "grid-area";
            grid_auto_columns "grid-auto-columns";
            grid_auto_flow "grid-auto-flow";
            grid_auto_rows "grid-auto-rows";
            grid_column "grid-column";
            grid_column_end "grid-column-end";
            grid_column_gap "grid-column-gap";
            grid_column_start "grid-column-start";
            grid_gap "grid-gap";
            grid_row "grid-row";
            grid_row_end "grid-row-end";
            grid_row_gap "grid-row-gap";
            grid_row_start "grid-row-start";
            grid_template "grid-template";
            grid_template_areas "grid-template-areas";
            grid_template_columns "grid-template-columns";
            grid_template_rows "grid-template-rows";
            hanging_punctuation "hanging-punctuation";
            height "height";
            hyphens "hyphens";
            hypenate_character "hypenate-character";
            image_rendering "image-rendering";
            inline_size "inline-size";
            inset "inset";
            inset_block "inset-block";
            inset_block_end "inset-block-end";
            inset_block_start "inset-block-start";
            inset_inline "inset-inline";
            inset_inline_end "inset-inline-end";
            inset_inline_start "inset-inline-start";
            justify_content "justify-content";
            justify_items "justify-items";
            justify_self "justify-self";
            left "left";
            letter_spacing "letter-spacing";
            line_break "line-break";
            line_height "line-height";
            list_style "list-style";
            list_style_image "list-style-image";
            list_style_position "list-style-position";
            list_style_type "list-style-type";
            margin "margin";
            margin_block "margin-block";
            margin_block_end "margin-block-end";
            margin_block_start "margin-block-start";
            margin_bottom "margin-bottom";
            margin_inline "margin-inline";
            margin_inline_end "margin-inline-end";
            margin_inline_start "margin-inline-start";
            margin_left "margin-left";
            margin_right "margin-right";
            margin_top "margin-top";
            mask "mask";
            mask_clip "mask-clip";
            mask_composite "mask-composite";
            mask_image "mask-image";
            mask_mode "mask-mode";
            mask_origin "mask-origin";
            mask_position "mask-position";
            mask_repeat "mask-repeat";
            mask_size "mask-size";
            mask_type "mask-type";
            max_height "max-height";
            max_width "max-width";
            max_block_size "max-block-size";
            max_inline_size "max-inline-size";
            min_block_size "min-block-size";
            min_inline_size "min-inline-size";
            min_height "min-height";
            min_width "min-width";
            mix_blend_mode "mix-blend-mode";
            object_fit "object-fit";
            object_position "object-position";
            offset "offset";
            offset_anchor "offset-anchor";
            offset_distance "offset-distance";
            offset_path "offset-path";
            offset_rotate "offset-rotate";
            opacity "opacity";
            order "order";
            orphans "orphans";
            outline "outline";
            outline_color "outline-color";
            outline_offset "outline-offset";
            outline_style "outline-style";
            outline_width "outline-width";
            overflow "overflow";
            overflow_anchor "overflow-anchor";
            overflow_wrap "overflow-wrap";
            overflow_x "overflow-x";
            overflow_y "overflow-y";
            overscroll_behavior "overscroll-behavior";
            overscroll_behavior_block "overscroll-behavior-block";
            overscroll_behavior_inline "overscroll-behavior-inline";
            overscroll_behavior_x "overscroll-behavior-x";
            overscroll_behavior_y "overscroll-behavior-y";
            padding "padding";
            padding_block "padding-block";
            padding_block_end "padding-block-end";
            padding_block_start "padding-block-start";
            padding_bottom "padding-bottom";
            padding_inline "padding-inline";
            padding_inline_end "padding-inline-end";
            padding_inline_start "padding-inline-start";
            padding_left "padding-left";
            padding_right "padding-right";
            padding_top "padding-top";
            page_break_after "page-break-after";
            page_break_before "page-break-before";
            page_break_inside "page-break-inside";
            paint_order "paint-order";
            perspective "perspective";
            perspective_origin "perspective-origin";
            place_content "place-content";
            place_items "place-items";
            place_self "place-self";
            pointer_events "pointer-events";
            position "position";
            quotes "quotes";
            resize "resize";
            right "right";
            rotate "rotate";
            row_gap "row-gap";
            scale "scale";
            scroll_behavior "scroll-behavior";
            scroll_margin "scroll-margin";
            scroll_margin_block "scroll-margin-block";
            scroll_margin_block_end "scroll-margin-block-end";
            scroll_margin_block_start "scroll-margin-block-start";
            scroll_margin_bottom "scroll-margin-bottom";
            scroll_margin_inline "scroll-margin-inline";
            scroll_margin_inline_end "scroll-margin-inline-end";
            scroll_margin_inline_start "scroll-margin-inline-start";
            scroll_margin_left "scroll-margin-left";
            scroll_margin_right "scroll-margin-right";
            scroll_margin_top "scroll-margin-top";
            scroll_padding "scroll-padding";
            scroll_padding_block "scroll-padding-block";
            scroll_padding_block_end "scroll-padding-block-end";
            scroll_padding_block_start "scroll-padding-block-start";
            scroll_padding_bottom "scroll-padding-bottom";
            scroll_padding_inline "scroll-padding-inline";
            scroll_padding_inline_end "scroll-padding-inline-end";
            scroll_padding_inline_start "scroll-padding-inline-start";
            scroll_padding_left "scroll-padding-left";
            scroll_padding_right "scroll-padding-right";
            scroll_padding_top "scroll-padding-top";
            scroll_snap_align "scroll-snap-align";
            scroll_snap_stop "scroll-snap-stop";
            scroll_snap_type "scroll-snap-type";
            scrollbar_color "scrollbar-color";
            tab_size "tab-size";
            table_layout "table-layout";
            text_align "text-align";
            text_align_last "text-align-last";
            text_combine_upright "text-combine-upright";
            text_decoration "text-decoration";
            text_decoration_color "text-decoration-color";
            text_decoration_line "text-decoration-line";
            text_decoration_style "text-decoration-style";
            text_decoration_thickness "text-decoration-thickness";
            text_emphasis "text-emphasis";
            text_emphasis_color "text-emphasis-color";
            text_emphasis_position "text-emphasis-position";
            text_emphasis_style "text-emphasis-style";
            text_indent "text-indent";
            text_justify "text-justify";
            text_orientation "text-orientation";
            text_overflow "text-overflow";
            text_shadow "text-shadow";
            text_transform "text-transform";
            text_underline_offset "text-underline-offset";
            text_underline_position "text-underline-position";
            top "top";
            transform "transform";
            transform_origin "transform-origin";
            transform_style "transform-style";
            transition "transition";
            transition_delay "transition-delay";
            transition_duration "transition-duration";
            transition_property "transition-property";
            transition_timing_function "transition-timing-function";
            translate "translate";
            unicode_bidi "unicode-bidi";
            user_select "user-select";
            vertical_align "vertical-align";
            visibility "visibility";
            white_space "white-space";
            widows "widows";
            width "width";
            word_break "word-break";
            word_spacing "word-spacing";
            word_wrap "word-wrap";
            writing_mode "writing-mode";
            z_index "z-index";
        }
    };
}
